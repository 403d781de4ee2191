use crate::dto::products::{CreateProductRequest, UpdateProductRequest};
use crate::error::{StoreError, StoreResult};
use crate::models::{Category, Product};
use crate::state::StoreState;

pub fn list_products(state: &StoreState) -> &[Product] {
    &state.products
}

pub fn products_by_category(state: &StoreState, category: Category) -> Vec<&Product> {
    state
        .products
        .iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Case-insensitive match over name, brand and description.
pub fn search_products<'a>(state: &'a StoreState, query: &str) -> Vec<&'a Product> {
    let pattern = query.to_lowercase();
    state
        .products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&pattern)
                || p.brand.to_lowercase().contains(&pattern)
                || p.description.to_lowercase().contains(&pattern)
        })
        .collect()
}

pub fn get_product(state: &StoreState, id: u64) -> StoreResult<&Product> {
    state
        .products
        .iter()
        .find(|p| p.id == id)
        .ok_or(StoreError::NotFound)
}

pub fn create_product(state: &mut StoreState, payload: CreateProductRequest) -> Product {
    let product = Product {
        id: state.allocate_id(),
        name: payload.name,
        category: payload.category,
        price: payload.price,
        original_price: payload.original_price,
        image: payload.image,
        description: payload.description,
        specs: payload.specs,
        stock: payload.stock,
        brand: payload.brand,
    };
    state.products.push(product.clone());
    product
}

pub fn update_product(
    state: &mut StoreState,
    id: u64,
    payload: UpdateProductRequest,
) -> StoreResult<Product> {
    let product = state
        .products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StoreError::NotFound)?;

    if let Some(name) = payload.name {
        product.name = name;
    }
    if let Some(category) = payload.category {
        product.category = category;
    }
    if let Some(price) = payload.price {
        product.price = price;
    }
    if let Some(original_price) = payload.original_price {
        product.original_price = Some(original_price);
    }
    if let Some(image) = payload.image {
        product.image = image;
    }
    if let Some(description) = payload.description {
        product.description = description;
    }
    if let Some(specs) = payload.specs {
        product.specs = specs;
    }
    if let Some(stock) = payload.stock {
        product.stock = stock;
    }
    if let Some(brand) = payload.brand {
        product.brand = brand;
    }

    Ok(product.clone())
}

/// Orders that already embarked a copy of the product are left untouched.
pub fn delete_product(state: &mut StoreState, id: u64) -> StoreResult<()> {
    let before = state.products.len();
    state.products.retain(|p| p.id != id);
    if state.products.len() == before {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
