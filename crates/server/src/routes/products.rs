use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use models::product;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub product_name: String,
    pub quantity: i32,
    pub in_stock: bool,
}

#[derive(Debug, Serialize)]
pub struct ProductOutput {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub in_stock: bool,
}

impl From<product::Model> for ProductOutput {
    fn from(m: product::Model) -> Self {
        Self {
            product_id: m.product_id,
            product_name: m.product_name,
            quantity: m.quantity,
            in_stock: m.in_stock,
        }
    }
}

/// Create a product; no duplicate check of any kind.
pub async fn create_product(
    State(state): State<ServerState>,
    Json(input): Json<CreateProductInput>,
) -> Result<Json<ProductOutput>, ApiError> {
    let created =
        product::create(&state.db, &input.product_name, input.quantity, input.in_stock).await?;
    Ok(Json(created.into()))
}

/// List every product, storage order, unbounded.
pub async fn list_products(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ProductOutput>>, ApiError> {
    let products = product::list(&state.db).await?;
    Ok(Json(products.into_iter().map(ProductOutput::from).collect()))
}
