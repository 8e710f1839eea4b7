//! Static sample catalog backing the storefront screens. There is no server;
//! items and designers are fixed in-memory data.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Accessories,
    Shoes,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Accessories => "accessories",
            Category::Shoes => "shoes",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FashionItem {
    pub id: String,
    pub name: String,
    pub designer: String,
    pub price: u32,
    pub image: String,
    pub category: Category,
    pub description: String,
    pub is_available: bool,
    pub rating: f32,
    pub likes: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Designer {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub speciality: String,
    pub location: String,
    pub rating: f32,
    pub review_count: u32,
    pub followers: u32,
    pub starting_price: u32,
    pub portfolio_images: Vec<String>,
    pub is_verified: bool,
    pub response_time: String,
}

pub static FASHION_ITEMS: Lazy<Vec<FashionItem>> = Lazy::new(|| {
    vec![
        FashionItem {
            id: "1".into(),
            name: "Custom Ankara Maxi Dress".into(),
            designer: "Ada Fashion House".into(),
            price: 45_000,
            image: "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=400&h=600&fit=crop".into(),
            category: Category::Clothing,
            description: "Elegant handcrafted Ankara maxi dress perfect for special occasions.".into(),
            is_available: true,
            rating: 4.8,
            likes: 124,
        },
        FashionItem {
            id: "2".into(),
            name: "Handwoven Leather Tote".into(),
            designer: "Lagos Leather Co".into(),
            price: 28_500,
            image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=600&fit=crop".into(),
            category: Category::Accessories,
            description: "Premium leather tote bag with traditional weaving techniques.".into(),
            is_available: true,
            rating: 4.9,
            likes: 89,
        },
        FashionItem {
            id: "3".into(),
            name: "Royal Agbada with Gold Trim".into(),
            designer: "Royal Threads Nigeria".into(),
            price: 125_000,
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=600&fit=crop".into(),
            category: Category::Clothing,
            description: "Luxurious traditional Agbada with intricate gold embroidery.".into(),
            is_available: true,
            rating: 5.0,
            likes: 203,
        },
        FashionItem {
            id: "4".into(),
            name: "Beaded Statement Necklace".into(),
            designer: "Afro Beads Collection".into(),
            price: 15_500,
            image: "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=400&h=600&fit=crop".into(),
            category: Category::Accessories,
            description: "Handcrafted beaded necklace with traditional African patterns.".into(),
            is_available: false,
            rating: 4.7,
            likes: 67,
        },
    ]
});

pub static DESIGNERS: Lazy<Vec<Designer>> = Lazy::new(|| {
    vec![
        Designer {
            id: "1".into(),
            name: "Adaora Okafor".into(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face".into(),
            speciality: "Ankara & Contemporary Wear".into(),
            location: "Lagos, Nigeria".into(),
            rating: 4.9,
            review_count: 127,
            followers: 2340,
            starting_price: 25_000,
            portfolio_images: vec![
                "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=200&h=200&fit=crop".into(),
                "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=200&h=200&fit=crop".into(),
                "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=200&h=200&fit=crop".into(),
            ],
            is_verified: true,
            response_time: "~2 hours".into(),
        },
        Designer {
            id: "2".into(),
            name: "Ibrahim Suleiman".into(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face".into(),
            speciality: "Leather Goods & Accessories".into(),
            location: "Kano, Nigeria".into(),
            rating: 4.8,
            review_count: 89,
            followers: 1876,
            starting_price: 15_000,
            portfolio_images: vec![
                "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=200&h=200&fit=crop".into(),
                "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b?w=200&h=200&fit=crop".into(),
                "https://images.unsplash.com/photo-1590874103328-eac38a683ce7?w=200&h=200&fit=crop".into(),
            ],
            is_verified: true,
            response_time: "~1 hour".into(),
        },
        Designer {
            id: "3".into(),
            name: "Kemi Adebayo".into(),
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face".into(),
            speciality: "Jewelry & Beadwork".into(),
            location: "Ibadan, Nigeria".into(),
            rating: 4.9,
            review_count: 203,
            followers: 3201,
            starting_price: 8_000,
            portfolio_images: vec![
                "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=200&h=200&fit=crop".into(),
                "https://images.unsplash.com/photo-1506630448388-4e683c67ddb0?w=200&h=200&fit=crop".into(),
                "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=200&h=200&fit=crop".into(),
            ],
            is_verified: false,
            response_time: "~30 mins".into(),
        },
        Designer {
            id: "4".into(),
            name: "Chike Okwu".into(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face".into(),
            speciality: "Traditional & Ceremonial".into(),
            location: "Abuja, Nigeria".into(),
            rating: 4.7,
            review_count: 156,
            followers: 2890,
            starting_price: 45_000,
            portfolio_images: vec![
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&h=200&fit=crop".into(),
                "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=200&h=200&fit=crop".into(),
                "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=200&h=200&fit=crop".into(),
            ],
            is_verified: true,
            response_time: "~4 hours".into(),
        },
    ]
});

pub fn item_by_id(id: &str) -> Option<&'static FashionItem> {
    FASHION_ITEMS.iter().find(|item| item.id == id)
}

/// Case-insensitive search over item name and designer name.
pub fn search_items(query: &str) -> Vec<&'static FashionItem> {
    let query = query.to_lowercase();
    FASHION_ITEMS
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&query)
                || item.designer.to_lowercase().contains(&query)
        })
        .collect()
}

/// Case-insensitive search over designer name, speciality and location.
pub fn search_designers(query: &str) -> Vec<&'static Designer> {
    let query = query.to_lowercase();
    DESIGNERS
        .iter()
        .filter(|designer| {
            designer.name.to_lowercase().contains(&query)
                || designer.speciality.to_lowercase().contains(&query)
                || designer.location.to_lowercase().contains(&query)
        })
        .collect()
}

/// Formats a naira amount with thousand separators, e.g. `₦45,000`.
pub fn format_naira(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₦{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_items_matches_name_and_designer() {
        let by_name = search_items("ankara");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "1");

        let by_designer = search_items("lagos leather");
        assert_eq!(by_designer.len(), 1);
        assert_eq!(by_designer[0].id, "2");

        assert_eq!(search_items("").len(), FASHION_ITEMS.len());
        assert!(search_items("no such thing").is_empty());
    }

    #[test]
    fn search_designers_matches_speciality_and_location() {
        let jewellers = search_designers("jewelry");
        assert_eq!(jewellers.len(), 1);
        assert_eq!(jewellers[0].name, "Kemi Adebayo");

        let in_kano = search_designers("kano");
        assert_eq!(in_kano.len(), 1);
        assert_eq!(in_kano[0].name, "Ibrahim Suleiman");
    }

    #[test]
    fn item_lookup_by_id() {
        assert_eq!(item_by_id("3").map(|i| i.name.as_str()), Some("Royal Agbada with Gold Trim"));
        assert!(item_by_id("99").is_none());
    }

    #[test]
    fn naira_formatting_groups_thousands() {
        assert_eq!(format_naira(0), "₦0");
        assert_eq!(format_naira(999), "₦999");
        assert_eq!(format_naira(15_500), "₦15,500");
        assert_eq!(format_naira(125_000), "₦125,000");
        assert_eq!(format_naira(1_250_000), "₦1,250,000");
    }
}
