use crate::models::{Category, Product};

/// Built-in catalog used when no persisted state exists yet.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "iPhone 15 Pro Max".into(),
            category: Category::Phone,
            price: 29_990_000,
            original_price: Some(34_990_000),
            image: "https://images.unsplash.com/photo-1696446702183-cbd50c2efc42?w=500&h=500&fit=crop".into(),
            description: "iPhone 15 Pro Max với chip A17 Pro mạnh mẽ, camera 48MP, màn hình Super Retina XDR 6.7 inch".into(),
            specs: specs(&["Chip A17 Pro", "Camera 48MP", "RAM 8GB", "Bộ nhớ 256GB", "Pin 4422mAh"]),
            stock: 50,
            brand: "Apple".into(),
        },
        Product {
            id: 2,
            name: "Samsung Galaxy S24 Ultra".into(),
            category: Category::Phone,
            price: 26_990_000,
            original_price: Some(29_990_000),
            image: "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?w=500&h=500&fit=crop".into(),
            description: "Samsung Galaxy S24 Ultra với bút S Pen, camera 200MP, màn hình Dynamic AMOLED 6.8 inch".into(),
            specs: specs(&["Snapdragon 8 Gen 3", "Camera 200MP", "RAM 12GB", "Bộ nhớ 256GB", "Pin 5000mAh"]),
            stock: 45,
            brand: "Samsung".into(),
        },
        Product {
            id: 3,
            name: "MacBook Pro 14 M3".into(),
            category: Category::Laptop,
            price: 42_990_000,
            original_price: Some(46_990_000),
            image: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=500&h=500&fit=crop".into(),
            description: "MacBook Pro 14 inch với chip M3, màn hình Liquid Retina XDR, hiệu năng vượt trội".into(),
            specs: specs(&["Chip M3", "RAM 8GB", "SSD 512GB", "Màn hình 14.2 inch", "Pin 70Wh"]),
            stock: 30,
            brand: "Apple".into(),
        },
        Product {
            id: 4,
            name: "Dell XPS 15".into(),
            category: Category::Laptop,
            price: 35_990_000,
            original_price: Some(39_990_000),
            image: "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?w=500&h=500&fit=crop".into(),
            description: "Dell XPS 15 với Intel Core i7 thế hệ 13, màn hình OLED 4K, thiết kế cao cấp".into(),
            specs: specs(&["Intel Core i7-13700H", "RAM 16GB", "SSD 512GB", "RTX 4050", "Màn hình 15.6 inch OLED"]),
            stock: 25,
            brand: "Dell".into(),
        },
        Product {
            id: 5,
            name: "iPad Pro 12.9 M2".into(),
            category: Category::Tablet,
            price: 28_990_000,
            original_price: Some(31_990_000),
            image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=500&h=500&fit=crop".into(),
            description: "iPad Pro 12.9 inch với chip M2, màn hình Liquid Retina XDR, hỗ trợ Apple Pencil".into(),
            specs: specs(&["Chip M2", "RAM 8GB", "Bộ nhớ 128GB", "Màn hình 12.9 inch", "Camera 12MP"]),
            stock: 40,
            brand: "Apple".into(),
        },
        Product {
            id: 6,
            name: "ASUS ROG Strix G16".into(),
            category: Category::Laptop,
            price: 38_990_000,
            original_price: Some(42_990_000),
            image: "https://images.unsplash.com/photo-1603302576837-37561b2e2302?w=500&h=500&fit=crop".into(),
            description: "ASUS ROG Strix G16 - Laptop gaming mạnh mẽ với RTX 4060, màn hình 165Hz".into(),
            specs: specs(&["Intel Core i7-13650HX", "RAM 16GB", "SSD 512GB", "RTX 4060", "Màn hình 16 inch 165Hz"]),
            stock: 20,
            brand: "ASUS".into(),
        },
        Product {
            id: 7,
            name: "Xiaomi 14 Pro".into(),
            category: Category::Phone,
            price: 18_990_000,
            original_price: Some(21_990_000),
            image: "https://images.unsplash.com/photo-1598327105666-5b89351aff97?w=500&h=500&fit=crop".into(),
            description: "Xiaomi 14 Pro với camera Leica, Snapdragon 8 Gen 3, sạc nhanh 120W".into(),
            specs: specs(&["Snapdragon 8 Gen 3", "Camera 50MP Leica", "RAM 12GB", "Bộ nhớ 256GB", "Pin 4880mAh"]),
            stock: 60,
            brand: "Xiaomi".into(),
        },
        Product {
            id: 8,
            name: "HP Pavilion 15".into(),
            category: Category::Laptop,
            price: 18_990_000,
            original_price: Some(21_990_000),
            image: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=500&h=500&fit=crop".into(),
            description: "HP Pavilion 15 - Laptop văn phòng hiệu suất cao, thiết kế thanh lịch".into(),
            specs: specs(&["Intel Core i5-1235U", "RAM 8GB", "SSD 512GB", "Intel Iris Xe", "Màn hình 15.6 inch FHD"]),
            stock: 35,
            brand: "HP".into(),
        },
    ]
}

fn specs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
