//! Demo account and starter feed written into empty storage.

use chrono::{DateTime, Utc};

use super::{AuthorSnapshot, BlogPost, Comment, avatar_url};

pub const DEMO_USER_ID: &str = "demo";
pub const DEMO_USER_NAME: &str = "Demo User";
pub const DEMO_USER_EMAIL: &str = "demo@agriscan.com";
pub const DEMO_USER_PASSWORD: &str = "demo123";

fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn member(id: &str, name: &str, seed: &str) -> AuthorSnapshot {
    AuthorSnapshot::new(id, name, &avatar_url(seed))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The three community posts a fresh feed starts with.
pub fn demo_posts() -> Vec<BlogPost> {
    let sarah = member("mock1", "Sarah Chen", "sarah");

    vec![
        BlogPost {
            id: "1".to_string(),
            author: sarah.clone(),
            plant_name: "Tomato Plant".to_string(),
            diagnosis: "Nitrogen Deficiency".to_string(),
            image: "https://images.unsplash.com/photo-1592841200221-a6898f307baa?w=800&h=800&fit=crop".to_string(),
            content: "Noticed my tomato plants showing yellowing of lower leaves. After scanning, diagnosed with nitrogen deficiency. The leaves were pale green to yellow, starting from the bottom.".to_string(),
            remedies: strings(&[
                "Apply nitrogen-rich fertilizer (10-5-5 NPK ratio)",
                "Add compost or aged manure to soil",
                "Use fish emulsion as a quick nitrogen boost",
                "Ensure proper watering to help nutrient absorption",
            ]),
            upvotes: 24,
            downvotes: 2,
            comments: vec![Comment {
                id: "c1".to_string(),
                author: member("mock2", "John Farmer", "john"),
                content: "Had the same issue last season! Fish emulsion worked wonders for me.".to_string(),
                created_at: at("2026-02-24T10:30:00Z"),
            }],
            created_at: at("2026-02-24T08:15:00Z"),
            user_vote: None,
        },
        BlogPost {
            id: "2".to_string(),
            author: member("mock3", "Mike Rodriguez", "mike"),
            plant_name: "Rose Bush".to_string(),
            diagnosis: "Iron Deficiency (Chlorosis)".to_string(),
            image: "https://images.unsplash.com/photo-1518709268805-4e9042af9f23?w=800&h=800&fit=crop".to_string(),
            content: "My rose bushes were showing yellowing between the veins while veins stayed green. Classic iron deficiency symptoms!".to_string(),
            remedies: strings(&[
                "Apply chelated iron supplement",
                "Lower soil pH if too alkaline (target 6.0-6.5)",
                "Add sulfur to acidify soil",
                "Improve drainage to prevent nutrient lockout",
            ]),
            upvotes: 18,
            downvotes: 1,
            comments: Vec::new(),
            created_at: at("2026-02-23T14:20:00Z"),
            user_vote: None,
        },
        BlogPost {
            id: "3".to_string(),
            author: member("mock4", "Emma Green", "emma"),
            plant_name: "Corn Plant".to_string(),
            diagnosis: "Phosphorus Deficiency".to_string(),
            image: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=800&h=800&fit=crop".to_string(),
            content: "Noticed purple discoloration on corn leaves and stunted growth. Scan revealed phosphorus deficiency.".to_string(),
            remedies: strings(&[
                "Apply phosphorus-rich fertilizer (5-10-5 NPK)",
                "Add bone meal to soil",
                "Test and adjust soil pH to 6.0-7.0",
                "Ensure soil temperature is adequate (above 55°F)",
            ]),
            upvotes: 15,
            downvotes: 0,
            comments: vec![
                Comment {
                    id: "c2".to_string(),
                    author: sarah,
                    content: "Great post! I always forget to check soil temperature.".to_string(),
                    created_at: at("2026-02-25T09:45:00Z"),
                },
                Comment {
                    id: "c3".to_string(),
                    author: member("mock5", "David Park", "david"),
                    content: "Bone meal is excellent for this. Worked for my peppers too!".to_string(),
                    created_at: at("2026-02-25T11:20:00Z"),
                },
            ],
            created_at: at("2026-02-22T16:45:00Z"),
            user_vote: None,
        },
    ]
}
