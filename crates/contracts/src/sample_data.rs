//! In-memory seed data. The dashboard has no backend, every page starts from these records.

use crate::dashboards::d400_sustainability::{DashboardStats, RecentOrder, SustainabilityPoint};
use crate::dashboards::d401_analytics::{SalesPoint, TopProduct};
use crate::domain::a001_product::{Product, ProductCatalog, ProductId};
use crate::domain::a002_order::{Order, OrderId, OrderItem};
use crate::enums::OrderStatus;
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are literal calendar days
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    sku: &str,
    price: f64,
    stock: u32,
    amazon_stock: u32,
    category: &str,
    image: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        sku: sku.to_string(),
        price,
        stock,
        amazon_stock,
        category: category.to_string(),
        image: image.to_string(),
    }
}

pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Bamboo Toothbrush",
            "BTB001",
            4.99,
            245,
            150,
            "Personal Care",
            "https://images.unsplash.com/photo-1607613009820-a29f7bb81c04?w=200",
        ),
        product(
            "2",
            "Reusable Water Bottle",
            "RWB002",
            24.99,
            122,
            80,
            "Kitchen",
            "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=200",
        ),
        product(
            "3",
            "Organic Cotton Bags",
            "OCB003",
            12.99,
            89,
            60,
            "Shopping",
            "https://imgs.search.brave.com/ArR1nBOPMitlLHILWq58QCW7O0Xv8NGcIs0aH-OuXV8/rs:fit:500:0:0:0/g:ce/aHR0cHM6Ly93d3cu/b3JnYW5pY2NvdHRv/bm1hcnQuY29tL2Nk/bi9zaG9wL3Byb2R1/Y3RzL09yZ2FuaWMt/Q290dG9uLUNhbnZh/cy1Ub3RlLUdyb2Nl/cnktQmFnc18xOTQ2/eC5qcGc_dj0xNzA2/Nzc5NjEx",
        ),
    ]
}

pub fn seed_catalog() -> ProductCatalog {
    ProductCatalog::new(seed_products())
}

fn item(product_id: &str, quantity: u32, price: f64) -> OrderItem {
    OrderItem {
        product_id: ProductId::new(product_id),
        quantity,
        price,
    }
}

pub fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-001"),
            customer_name: "Sarah Johnson".into(),
            status: OrderStatus::Processing,
            date: day(2024, 3, 15),
            total: 89.99,
            items: vec![item("1", 2, 29.99), item("2", 1, 30.01)],
            shipping_address: "123 Green St, Portland, OR".into(),
            tracking_number: None,
        },
        Order {
            id: OrderId::new("ORD-002"),
            customer_name: "Mike Peters".into(),
            status: OrderStatus::Shipped,
            date: day(2024, 3, 14),
            total: 145.50,
            items: vec![item("2", 3, 48.50)],
            shipping_address: "456 Eco Ave, Seattle, WA".into(),
            tracking_number: Some("MCF123456789".into()),
        },
        Order {
            id: OrderId::new("ORD-003"),
            customer_name: "Emma Davis".into(),
            status: OrderStatus::Delivered,
            date: day(2024, 3, 13),
            total: 76.25,
            items: vec![item("3", 1, 76.25)],
            shipping_address: "789 Earth Blvd, Austin, TX".into(),
            tracking_number: Some("MCF987654321".into()),
        },
    ]
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_products: 156,
        low_stock: 12,
        pending_orders: 8,
        monthly_revenue: 24650.0,
        carbon_offset: 1250,
        water_saved: 5000,
        energy_saved: 750,
        trees_planted: 45,
    }
}

pub fn sustainability_series() -> Vec<SustainabilityPoint> {
    [
        ("Jan", 1200.0, 4500.0, 680.0),
        ("Feb", 1100.0, 4800.0, 720.0),
        ("Mar", 1250.0, 5000.0, 750.0),
        ("Apr", 1180.0, 4900.0, 730.0),
        ("May", 1300.0, 5200.0, 780.0),
        ("Jun", 1250.0, 5000.0, 750.0),
    ]
    .into_iter()
    .map(|(month, carbon, water, energy)| SustainabilityPoint {
        month: month.to_string(),
        carbon,
        water,
        energy,
    })
    .collect()
}

pub fn recent_orders() -> Vec<RecentOrder> {
    [
        ("1", "Sarah Johnson", "Processing", 89.99, day(2024, 3, 15), 85),
        ("2", "Mike Peters", "Shipped", 145.50, day(2024, 3, 14), 92),
        ("3", "Emma Davis", "Delivered", 76.25, day(2024, 3, 13), 78),
    ]
    .into_iter()
    .map(|(id, customer, status, amount, date, eco_score)| RecentOrder {
        id: id.to_string(),
        customer: customer.to_string(),
        status: status.to_string(),
        amount,
        date,
        eco_score,
    })
    .collect()
}

pub fn sales_series() -> Vec<SalesPoint> {
    [
        ("Jan", 4000.0, 240),
        ("Feb", 3000.0, 198),
        ("Mar", 5000.0, 305),
        ("Apr", 4500.0, 275),
        ("May", 6000.0, 410),
        ("Jun", 5500.0, 385),
    ]
    .into_iter()
    .map(|(month, sales, orders)| SalesPoint {
        month: month.to_string(),
        sales,
        orders,
    })
    .collect()
}

pub fn top_products() -> Vec<TopProduct> {
    [
        ("Bamboo Toothbrush", 1200),
        ("Reusable Water Bottle", 950),
        ("Organic Cotton Bags", 850),
        ("Eco-friendly Soap", 700),
        ("Metal Straws", 650),
    ]
    .into_iter()
    .map(|(name, sales)| TopProduct {
        name: name.to_string(),
        sales,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.next_id().as_str(), "4");
    }

    #[test]
    fn test_seed_orders_reference_seed_products() {
        let catalog = seed_catalog();
        for order in seed_orders() {
            for line in &order.items {
                assert!(
                    catalog.items().iter().any(|p| p.id == line.product_id),
                    "{}",
                    line.product_id
                );
            }
        }
    }

    #[test]
    fn test_chart_series_cover_six_months() {
        assert_eq!(sustainability_series().len(), 6);
        assert_eq!(sales_series().len(), 6);
        assert_eq!(top_products()[0].name, "Bamboo Toothbrush");
    }
}
