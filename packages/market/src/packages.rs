//! Service details page data: package tiers, the showcased service, and the
//! image carousel state.
//!
//! The details page always shows the same service regardless of the id in the
//! route. Selecting a tier only changes which [`PackageDetails`] is displayed.

/// Package tier offered on the details page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tier {
    #[default]
    Basic,
    Standard,
    Premium,
}

/// What a tier includes.
#[derive(Clone, Debug, PartialEq)]
pub struct PackageDetails {
    pub name: &'static str,
    pub description: &'static str,
    pub delivery_time: &'static str,
    pub revisions: u32,
    pub price: u32,
    pub features: &'static [&'static str],
}

const BASIC: PackageDetails = PackageDetails {
    name: "Basic",
    description: "Basic package for simple projects",
    delivery_time: "3 days",
    revisions: 1,
    price: 50,
    features: &["Source file", "1 page", "Responsive design", "Commercial use"],
};

const STANDARD: PackageDetails = PackageDetails {
    name: "Standard",
    description: "Recommended package for most projects",
    delivery_time: "5 days",
    revisions: 3,
    price: 100,
    features: &[
        "Source file",
        "3 pages",
        "Responsive design",
        "Commercial use",
        "Custom animations",
        "Design customization",
    ],
};

const PREMIUM: PackageDetails = PackageDetails {
    name: "Premium",
    description: "Complete solution for complex projects",
    delivery_time: "7 days",
    revisions: 5,
    price: 200,
    features: &[
        "Source file",
        "5 pages",
        "Responsive design",
        "Commercial use",
        "Custom animations",
        "Design customization",
        "Priority support",
        "SEO optimization",
    ],
};

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Standard, Tier::Premium];

    pub fn details(self) -> &'static PackageDetails {
        match self {
            Tier::Basic => &BASIC,
            Tier::Standard => &STANDARD,
            Tier::Premium => &PREMIUM,
        }
    }
}

impl PackageDetails {
    /// Label of the call-to-action button.
    pub fn cta_label(&self) -> String {
        format!("Continue (${})", self.price)
    }
}

/// The service shown on every details page.
#[derive(Clone, Debug, PartialEq)]
pub struct Showcase {
    pub title: &'static str,
    pub seller: &'static str,
    pub seller_avatar: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub slides: &'static [&'static str],
    pub about: &'static str,
    pub highlights: &'static [&'static str],
}

pub const SHOWCASE: Showcase = Showcase {
    title: "I will create a professional website design",
    seller: "John Doe",
    seller_avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=100",
    rating: 4.9,
    reviews: 203,
    slides: &[
        "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=1200",
        "https://images.unsplash.com/photo-1522199755839-a2bacb67c546?auto=format&fit=crop&q=80&w=1200",
    ],
    about: "I will create a professional, modern, and responsive website design that perfectly matches your brand and business needs. With over 5 years of experience in web design, I ensure high-quality work and excellent communication throughout the project.",
    highlights: &[
        "Professional and modern design",
        "Fast delivery and communication",
        "Unlimited revisions until satisfaction",
        "100% satisfaction guaranteed",
        "Source files included",
    ],
};

/// Index into a fixed, wrapping set of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range values are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_prices_and_delivery() {
        let shown: Vec<_> = Tier::ALL
            .iter()
            .map(|t| (t.details().price, t.details().delivery_time))
            .collect();
        assert_eq!(shown, [(50, "3 days"), (100, "5 days"), (200, "7 days")]);
    }

    #[test]
    fn test_tier_bundles() {
        assert_eq!(Tier::default(), Tier::Basic);
        assert_eq!(Tier::Basic.details().revisions, 1);
        assert_eq!(Tier::Standard.details().features.len(), 6);
        assert_eq!(Tier::Premium.details().features.len(), 8);
        assert_eq!(Tier::Premium.details().cta_label(), "Continue ($200)");
    }

    #[test]
    fn test_carousel_wraps() {
        let mut c = Carousel::new(SHOWCASE.slides.len());
        assert_eq!(c.index(), 0);
        c.next();
        assert_eq!(c.index(), 1);
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 1);
        c.go_to(7);
        assert_eq!(c.index(), 1);
        c.go_to(0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }
}
