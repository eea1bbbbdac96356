//! Built-in reference tables. Prices are in TZS.

use crate::product::{
    AddOn, Coordinates, Location, PaymentMethod, Reward, RewardCategory, Season, ServicePackage,
    VehicleType, WeatherCondition,
};

pub static VEHICLE_TYPES: &[VehicleType] = &[
    VehicleType {
        id: "sedan",
        name: "Sedan",
        icon: "car",
        description: "Standard 4-door sedan",
        base_price: 10_000,
    },
    VehicleType {
        id: "suv",
        name: "SUV",
        icon: "truck",
        description: "Sport Utility Vehicle",
        base_price: 15_000,
    },
    VehicleType {
        id: "pickup",
        name: "Pickup",
        icon: "car",
        description: "Pickup truck",
        base_price: 17_000,
    },
    VehicleType {
        id: "luxury",
        name: "Luxury",
        icon: "car",
        description: "Premium luxury vehicle",
        base_price: 25_000,
    },
    VehicleType {
        id: "motorcycle",
        name: "Motorcycle",
        icon: "bike",
        description: "Motorcycles and scooters",
        base_price: 7_000,
    },
];

pub static SERVICE_PACKAGES: &[ServicePackage] = &[
    ServicePackage {
        id: "basic",
        name: "Basic Wash",
        description: "Exterior wash, wheels cleaning, and dry",
        features: &[
            "Exterior hand wash",
            "Wheel cleaning",
            "Tire dressing",
            "Hand drying",
            "Dust removal",
        ],
        price_multiplier: 1.0,
        duration: 30,
        icon: "droplets",
        color: "savannah",
        seasonal: false,
        season_type: None,
        eco: false,
    },
    ServicePackage {
        id: "premium",
        name: "Premium Wash",
        description: "Basic wash plus interior vacuum, window cleaning, and tire shine",
        features: &[
            "All Basic Wash services",
            "Interior vacuum",
            "Window cleaning",
            "Premium tire shine",
            "Dashboard dusting",
        ],
        price_multiplier: 1.7,
        duration: 60,
        icon: "sparkles",
        color: "tanzanite",
        seasonal: false,
        season_type: None,
        eco: false,
    },
    ServicePackage {
        id: "deluxe",
        name: "Deluxe Wash",
        description: "Premium wash plus waxing, upholstery cleaning, and dashboard care",
        features: &[
            "All Premium Wash services",
            "Car waxing",
            "Upholstery cleaning",
            "Dashboard conditioning",
            "Air freshener",
        ],
        price_multiplier: 2.5,
        duration: 90,
        icon: "star",
        color: "clay",
        seasonal: false,
        season_type: None,
        eco: false,
    },
    ServicePackage {
        id: "mud-buster",
        name: "Mud Buster",
        description: "Special package for rainy season with underbody cleaning",
        features: &[
            "Extra strong exterior wash",
            "Underbody cleaning",
            "Rust protection",
            "Mud removal from hard-to-reach areas",
            "Extra tire cleaning",
        ],
        price_multiplier: 1.8,
        duration: 75,
        icon: "cloud-rain",
        color: "kilimanjaro",
        seasonal: true,
        season_type: Some(Season::Rainy),
        eco: false,
    },
    ServicePackage {
        id: "waterless",
        name: "Waterless Wash",
        description: "Eco-friendly wash using biodegradable sprays",
        features: &[
            "No water used",
            "Biodegradable cleaning sprays",
            "Environmental friendly",
            "Works for light to medium dirt",
            "Includes hand wax",
        ],
        price_multiplier: 1.3,
        duration: 45,
        icon: "droplet-slash",
        color: "safari",
        seasonal: false,
        season_type: None,
        eco: true,
    },
];

pub static ADD_ONS: &[AddOn] = &[
    AddOn {
        id: "interior-disinfection",
        name: "Interior Disinfection",
        description: "Steam sanitising of seats, mats and vents",
        price: 15_000,
        duration: 20,
        icon: "spray-can",
    },
    AddOn {
        id: "engine-cleaning",
        name: "Engine Bay Cleaning",
        description: "Degreasing and dressing of the engine bay",
        price: 25_000,
        duration: 30,
        icon: "cog",
    },
    AddOn {
        id: "headlight-restoration",
        name: "Headlight Restoration",
        description: "Make old headlights look new again",
        price: 20_000,
        duration: 30,
        icon: "flashlight",
    },
    AddOn {
        id: "uv-protection",
        name: "UV Protection Coating",
        description: "Protect your paint from harsh sunlight",
        price: 35_000,
        duration: 60,
        icon: "sun",
    },
    AddOn {
        id: "ceramic-coating",
        name: "Eco-Ceramic Detailing",
        description: "Premium eco-friendly ceramic coating",
        price: 90_000,
        duration: 120,
        icon: "gem",
    },
    AddOn {
        id: "leather-care",
        name: "Leather Treatment",
        description: "Special care for leather interiors",
        price: 25_000,
        duration: 45,
        icon: "armchair",
    },
];

pub static LOCATIONS: &[Location] = &[
    Location {
        id: "dar-central",
        name: "Dar es Salaam Central",
        address: "Msasani Peninsula, Dar es Salaam",
        coordinates: Coordinates { lat: -6.7654, lng: 39.2583 },
        opening_hours: "7:00 AM - 8:00 PM",
        phone: "+255 123 456 789",
        services: &["basic", "premium", "deluxe", "mud-buster", "waterless"],
        mobile: false,
        busy: false,
    },
    Location {
        id: "dar-mbezi",
        name: "Mbezi Beach",
        address: "Mbezi Beach Area, Dar es Salaam",
        coordinates: Coordinates { lat: -6.7242, lng: 39.2191 },
        opening_hours: "7:30 AM - 7:00 PM",
        phone: "+255 987 654 321",
        services: &["basic", "premium", "deluxe", "waterless"],
        mobile: false,
        busy: true,
    },
    Location {
        id: "arusha",
        name: "Arusha City",
        address: "Central Arusha, near Clock Tower",
        coordinates: Coordinates { lat: -3.3667, lng: 36.6833 },
        opening_hours: "8:00 AM - 6:00 PM",
        phone: "+255 111 222 333",
        services: &["basic", "premium", "deluxe", "waterless"],
        mobile: false,
        busy: false,
    },
    Location {
        id: "mwanza",
        name: "Mwanza",
        address: "Rock City Mall, Mwanza",
        coordinates: Coordinates { lat: -2.5167, lng: 32.9000 },
        opening_hours: "8:00 AM - 7:00 PM",
        phone: "+255 444 555 666",
        services: &["basic", "premium", "mud-buster"],
        mobile: false,
        busy: false,
    },
    Location {
        id: "mobile-unit-1",
        name: "Mobile Unit 1",
        address: "Varies daily - Currently: Kigamboni",
        coordinates: Coordinates { lat: -6.8234, lng: 39.3085 },
        opening_hours: "9:00 AM - 5:00 PM",
        phone: "+255 777 888 999",
        services: &["basic", "premium", "waterless"],
        mobile: true,
        busy: false,
    },
];

pub static PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod { id: "m-pesa", name: "M-Pesa", icon: "smartphone", color: "green" },
    PaymentMethod { id: "tigo-pesa", name: "Tigo Pesa", icon: "smartphone", color: "blue" },
    PaymentMethod { id: "airtel-money", name: "Airtel Money", icon: "smartphone", color: "red" },
    PaymentMethod { id: "cash", name: "Cash on Site", icon: "banknote", color: "gray" },
];

pub static REWARDS: &[Reward] = &[
    Reward {
        id: "free-basic",
        name: "Free Basic Wash",
        description: "Redeem for a free basic wash service",
        points: 500,
        category: RewardCategory::Service,
    },
    Reward {
        id: "free-premium",
        name: "Free Premium Wash",
        description: "Redeem for a free premium wash service",
        points: 800,
        category: RewardCategory::Service,
    },
    Reward {
        id: "discount-50",
        name: "50% Discount",
        description: "50% off your next wash service",
        points: 300,
        category: RewardCategory::Discount,
    },
    Reward {
        id: "car-mat",
        name: "Artisanal Car Mat",
        description: "Handcrafted Tanzanian car mat",
        points: 1200,
        category: RewardCategory::Product,
    },
    Reward {
        id: "air-freshener",
        name: "Tanzanian Spice Air Freshener",
        description: "Unique air freshener with Tanzanian spices",
        points: 200,
        category: RewardCategory::Product,
    },
];

pub static WEATHER_CONDITIONS: &[WeatherCondition] = &[
    WeatherCondition {
        id: "sunny",
        name: "Sunny",
        icon: "sun",
        wash_recommendation: "Great day for a wash! The sun will help your car dry quickly.",
        recommended_package: Some("deluxe"),
    },
    WeatherCondition {
        id: "cloudy",
        name: "Cloudy",
        icon: "cloud",
        wash_recommendation: "Good day for washing with less water evaporation.",
        recommended_package: Some("premium"),
    },
    WeatherCondition {
        id: "rainy",
        name: "Rainy",
        icon: "cloud-rain",
        wash_recommendation: "Consider our Mud Buster package to deal with rainwater and mud.",
        recommended_package: Some("mud-buster"),
    },
    WeatherCondition {
        id: "dust-storm",
        name: "Dust Storm",
        icon: "wind",
        wash_recommendation: "Wait until the dust settles before washing.",
        recommended_package: None,
    },
    WeatherCondition {
        id: "post-dust",
        name: "Post Dust Storm",
        icon: "sun",
        wash_recommendation: "Perfect time for a wash to remove settled dust!",
        recommended_package: Some("basic"),
    },
];

pub static TIME_SLOTS: &[&str] = &[
    "07:00", "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
    "17:00", "18:00", "19:00",
];
