use crate::domain::requests::product::CreateProductRequest;
use crate::model::product::ProductStatus;

/// Demo catalog fixture used by the demo binary and integration tests.
/// One product is deliberately out of stock.
pub fn sample_products() -> Vec<CreateProductRequest> {
    let product = |name: &str, price: i64, stock: i32, description: &str| CreateProductRequest {
        name: name.to_string(),
        price,
        stock,
        description: Some(description.to_string()),
        image_url: None,
        status: ProductStatus::Published,
    };

    vec![
        product(
            "Demo product",
            3000,
            10,
            "Plain demo product used by the scripted flows.",
        ),
        product(
            "Minimal t-shirt",
            4980,
            25,
            "Simple 100% cotton tee that goes with anything.",
        ),
        product(
            "Leather wallet",
            12800,
            8,
            "Hand-stitched full-grain leather wallet.",
        ),
        product(
            "Canvas tote bag",
            6800,
            0,
            "Sturdy canvas tote, fits A4 documents. Currently out of stock.",
        ),
        product(
            "Wool knit sweater",
            15800,
            15,
            "Warm mid-weight knit for the colder months.",
        ),
        product(
            "Ceramic mug",
            2400,
            20,
            "Stoneware mug, dishwasher safe.",
        ),
    ]
}
