//! Page Content
//!
//! Static copy for the home, about and contact pages.

pub struct Stat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { icon: "🏆", label: "PREMIUM QUALITY", value: "100%" },
    Stat { icon: "👥", label: "HAPPY CUSTOMERS", value: "50K+" },
    Stat { icon: "⚡", label: "DAILY FRESH", value: "24/7" },
];

/// Home page teaser cards; the full menu lives on the menu page
pub struct FeaturedItem {
    pub name: &'static str,
    pub price: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub image: &'static str,
    pub description: &'static str,
}

pub const FEATURED_ITEMS: &[FeaturedItem] = &[
    FeaturedItem {
        name: "Ethiopian Yirgacheffe Single Origin",
        price: "$8.50",
        category: "Premium Signature",
        rating: 4.9,
        image: "/premium-espresso-in-elegant-cup.jpg",
        description: "Floral notes with bright acidity and wine-like finish",
    },
    FeaturedItem {
        name: "Bourbon Vanilla Caramel Macchiato",
        price: "$7.75",
        category: "Artisan Specialty",
        rating: 4.8,
        image: "/caramel-macchiato-with-latte-art.jpg",
        description: "Hand-crafted with Madagascar vanilla and caramel swirl",
    },
    FeaturedItem {
        name: "Nitro Cold Cascade Reserve",
        price: "$6.25",
        category: "Cold Brew Excellence",
        rating: 4.9,
        image: "/cold-brew-coffee-ice-glass.jpg",
        description: "Smooth nitrogen-infused cold brew with chocolate undertones",
    },
    FeaturedItem {
        name: "Maple Cinnamon Cloud Frappé",
        price: "$7.00",
        category: "Frozen Artistry",
        rating: 4.7,
        image: "/vanilla-frappe-whipped-cream-straw.jpg",
        description: "Organic maple syrup with Ceylon cinnamon and cloud foam",
    },
    FeaturedItem {
        name: "Steaming Espresso Perfection",
        price: "$5.50",
        category: "Classic Excellence",
        rating: 4.8,
        image: "/espresso-cup-dark-roast-steam.jpg",
        description: "Double shot perfection with golden crema",
    },
    FeaturedItem {
        name: "Citrus Cold Brew Fusion",
        price: "$6.75",
        category: "Innovative Blends",
        rating: 4.6,
        image: "/cold-brew-coffee-with-ice.jpg",
        description: "Cold brew with fresh orange essence and ice spheres",
    },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: &[Feature] = &[
    Feature {
        icon: "🎨",
        title: "Latte Art Mastery",
        description: "Every cup features hand-crafted latte art by our skilled baristas",
    },
    Feature {
        icon: "🕯️",
        title: "Ambiance Excellence",
        description: "Immerse yourself in our carefully designed coffee sanctuary",
    },
    Feature {
        icon: "♨️",
        title: "Steam Perfection",
        description: "Watch the aromatic steam rise from our perfectly brewed espresso",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub rating: usize,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Coffee Enthusiast",
        rating: 5,
        text: "The best coffee experience in the city! The atmosphere is incredible and the baristas are true artists.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Regular Customer",
        rating: 5,
        text: "Every visit feels like a premium experience. The attention to detail in every cup is remarkable.",
    },
    Testimonial {
        name: "Emma Rodriguez",
        role: "Daily Visitor",
        rating: 5,
        text: "This place has become my daily ritual. The quality and consistency are unmatched.",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone { year: "2018", title: "The Beginning", description: "Founded with a dream to create the perfect coffee experience" },
    Milestone { year: "2019", title: "First Expansion", description: "Opened our second location and introduced artisanal pastries" },
    Milestone { year: "2020", title: "Community Focus", description: "Launched community programs and local partnerships" },
    Milestone { year: "2021", title: "Digital Innovation", description: "Introduced online ordering and mobile app" },
    Milestone { year: "2022", title: "Sustainability", description: "Became carbon neutral and introduced eco-friendly packaging" },
    Milestone { year: "2024", title: "Premium Experience", description: "Redesigned spaces for the ultimate coffee experience" },
];

pub const VALUES: &[Feature] = &[
    Feature { icon: "🏆", title: "Quality First", description: "We source only the finest beans from sustainable farms worldwide" },
    Feature { icon: "👥", title: "Community", description: "Building connections one cup at a time in our welcoming spaces" },
    Feature { icon: "❤️", title: "Passion", description: "Every drink is crafted with love and attention to detail" },
    Feature { icon: "🕰️", title: "Tradition", description: "Honoring coffee traditions while embracing innovation" },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub experience: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Sarah Johnson", role: "Head Barista", experience: "8 years" },
    TeamMember { name: "Michael Chen", role: "Coffee Roaster", experience: "12 years" },
    TeamMember { name: "Emma Rodriguez", role: "Pastry Chef", experience: "10 years" },
];

pub struct ContactCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub action: &'static str,
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        icon: "📍",
        title: "Visit Us",
        details: &["123 Coffee Street, Downtown District", "New York, NY 10001"],
        action: "Get Directions",
    },
    ContactCard {
        icon: "🕒",
        title: "Opening Hours",
        details: &["Monday - Friday: 6:00 AM - 10:00 PM", "Saturday - Sunday: 7:00 AM - 11:00 PM"],
        action: "View Schedule",
    },
    ContactCard {
        icon: "📞",
        title: "Call Us",
        details: &["Phone: (555) 123-CAFE", "WhatsApp: (555) 123-4567"],
        action: "Call Now",
    },
    ContactCard {
        icon: "✉️",
        title: "Email Us",
        details: &["hello@hipsterscafe.com", "catering@hipsterscafe.com"],
        action: "Send Email",
    },
];

pub struct Location {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub hours: &'static str,
}

pub const LOCATIONS: &[Location] = &[
    Location {
        name: "Downtown Flagship",
        address: "123 Coffee Street, Downtown District",
        phone: "(555) 123-CAFE",
        hours: "Mon-Fri: 6AM-10PM, Sat-Sun: 7AM-11PM",
    },
    Location {
        name: "Uptown Branch",
        address: "456 Brew Avenue, Uptown Plaza",
        phone: "(555) 456-BREW",
        hours: "Mon-Fri: 7AM-9PM, Sat-Sun: 8AM-10PM",
    },
    Location {
        name: "University Campus",
        address: "789 Campus Drive, University District",
        phone: "(555) 789-JAVA",
        hours: "Mon-Fri: 6AM-11PM, Sat-Sun: 8AM-11PM",
    },
];

pub const SOCIAL_LINKS: &[&str] = &["Facebook", "Instagram", "Twitter", "LinkedIn"];
