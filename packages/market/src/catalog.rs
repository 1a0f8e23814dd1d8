//! Home page catalog: a fixed sample listing and the category bar.
//!
//! None of this is persisted and none of it is related to the services sellers
//! manage on their dashboard.

/// A card on the home page.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub id: u32,
    pub title: &'static str,
    pub seller: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub price: u32,
    pub image: &'static str,
    pub level: &'static str,
    pub delivery_time: &'static str,
    pub description: Option<&'static str>,
}

/// A top-level category with its dropdown entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
}

pub const LISTINGS: [Listing; 6] = [
    Listing {
        id: 1,
        title: "I will create a professional website design",
        seller: "Alex Johnson",
        rating: 4.9,
        reviews: 127,
        price: 50,
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=600",
        level: "Level 2 Seller",
        delivery_time: "3 days",
        description: Some("Professional and modern website design with unlimited revisions"),
    },
    Listing {
        id: 2,
        title: "I will design a modern and unique logo",
        seller: "Sarah Smith",
        rating: 4.8,
        reviews: 89,
        price: 35,
        image: "https://images.unsplash.com/photo-1626785774573-4b799315345d?auto=format&fit=crop&q=80&w=600",
        level: "Top Rated",
        delivery_time: "2 days",
        description: Some("Creative and memorable logo design for your brand"),
    },
    Listing {
        id: 3,
        title: "Content Writing",
        seller: "Mike Brown",
        rating: 4.7,
        reviews: 156,
        price: 25,
        image: "https://images.unsplash.com/photo-1455390582262-044cdead277a?auto=format&fit=crop&q=80&w=600",
        level: "Level 1 Seller",
        delivery_time: "1 day",
        description: None,
    },
    Listing {
        id: 4,
        title: "Social Media Marketing",
        seller: "Emma Wilson",
        rating: 4.9,
        reviews: 203,
        price: 45,
        image: "https://images.unsplash.com/photo-1611926653458-09294b3142bf?auto=format&fit=crop&q=80&w=600",
        level: "Top Rated",
        delivery_time: "4 days",
        description: None,
    },
    Listing {
        id: 5,
        title: "Mobile App Development",
        seller: "David Chen",
        rating: 4.8,
        reviews: 178,
        price: 65,
        image: "https://images.unsplash.com/photo-1522199755839-a2bacb67c546?auto=format&fit=crop&q=80&w=600",
        level: "Level 2 Seller",
        delivery_time: "5 days",
        description: None,
    },
    Listing {
        id: 6,
        title: "Video Editing",
        seller: "Lisa Anderson",
        rating: 4.7,
        reviews: 142,
        price: 40,
        image: "https://images.unsplash.com/photo-1574717024653-61fd2cf4d44d?auto=format&fit=crop&q=80&w=600",
        level: "Level 1 Seller",
        delivery_time: "2 days",
        description: None,
    },
];

pub const CATEGORIES: [Category; 4] = [
    Category {
        name: "Graphics & Design",
        subcategories: &["Logo Design", "Web Design", "App Design", "Illustration"],
    },
    Category {
        name: "Digital Marketing",
        subcategories: &["Social Media", "SEO", "Content Marketing", "Email Marketing"],
    },
    Category {
        name: "Writing & Translation",
        subcategories: &["Articles & Blog Posts", "Translation", "Proofreading", "Creative Writing"],
    },
    Category {
        name: "Video & Animation",
        subcategories: &["Video Editing", "Animation", "Short Video Ads", "Intros & Outros"],
    },
];

/// Listings whose title or seller contains `query`, ignoring case.
/// An empty query matches everything.
pub fn filter_listings(query: &str) -> Vec<Listing> {
    let needle = query.to_lowercase();
    LISTINGS
        .iter()
        .filter(|l| {
            needle.is_empty()
                || l.title.to_lowercase().contains(&needle)
                || l.seller.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
