// ============================================================================
// SAMPLE DATA — mock restaurant dataset for the UI
// In a real project this would come from an API call or database
// ============================================================================

use crate::models::Restaurant;

fn restaurant(
    id: u32,
    name: &str,
    cuisine: &[&str],
    rating: f64,
    cost_for_two: &str,
    delivery_time: &str,
    image: &str,
    offers: &[&str],
    featured: bool,
) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        cuisine: cuisine.iter().map(|c| c.to_string()).collect(),
        rating,
        cost_for_two: cost_for_two.to_string(),
        delivery_time: delivery_time.to_string(),
        image: image.to_string(),
        offers: offers.iter().map(|o| o.to_string()).collect(),
        featured,
    }
}

/// The fixed six-record dataset, in declared (relevance) order.
pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            1,
            "Bombay Bites",
            &["North Indian", "Street Food"],
            4.4,
            "₹600",
            "30-40 min",
            "https://images.unsplash.com/photo-1604908177522-9a2c7b6b5b33?q=80&w=800&auto=format&fit=crop",
            &["20% off upto ₹100"],
            true,
        ),
        restaurant(
            2,
            "Curry Corner",
            &["South Indian", "Seafood"],
            4.1,
            "₹750",
            "25-35 min",
            "https://images.unsplash.com/photo-1551218808-94e220e084d2?q=80&w=800&auto=format&fit=crop",
            &[],
            false,
        ),
        restaurant(
            3,
            "Pizza Planet",
            &["Italian", "Pizzas"],
            4.6,
            "₹900",
            "20-30 min",
            "https://images.unsplash.com/photo-1542281286-9e0a16bb7366?q=80&w=800&auto=format&fit=crop",
            &["Free Garlic Bread on orders above ₹500"],
            true,
        ),
        restaurant(
            4,
            "Sushi Studio",
            &["Japanese"],
            4.3,
            "₹1200",
            "45-55 min",
            "https://images.unsplash.com/photo-1553621042-f6e147245754?q=80&w=800&auto=format&fit=crop",
            &[],
            false,
        ),
        restaurant(
            5,
            "Green Bowl",
            &["Healthy", "Salads"],
            4.0,
            "₹500",
            "15-25 min",
            "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?q=80&w=800&auto=format&fit=crop",
            &["10% off with code HEALTHY10"],
            false,
        ),
        restaurant(
            6,
            "Brew & Bite",
            &["Cafe", "Desserts"],
            4.5,
            "₹650",
            "20-30 min",
            "https://images.unsplash.com/photo-1508962914676-3a2b1f8f1f3a?q=80&w=800&auto=format&fit=crop",
            &[],
            false,
        ),
    ]
}
