//! Reference tables compiled into the registry.
//!
//! Physical constants are exact where a definition exists (1 ft = 0.3048 m,
//! 1 lb = 0.45359237 kg). Currency rates are static reference values from
//! January 2025 and are never fetched.

use super::{Category, Unit};

/// Currency rates as units per US dollar: (id, label, rate).
pub const CURRENCY_RATES: [(&str, &str, f64); 6] = [
    ("usd", "USD - US Dollar", 1.0),
    ("vnd", "VND - Vietnamese Dong", 25300.0),
    ("eur", "EUR - Euro", 0.92),
    ("gbp", "GBP - British Pound", 0.79),
    ("jpy", "JPY - Japanese Yen", 145.6),
    ("sgd", "SGD - Singapore Dollar", 1.34),
];

/// All categories in display order. The first one is the session default.
pub(crate) fn all_categories() -> Vec<Category> {
    vec![
        currency(),
        length(),
        mass(),
        temperature(),
        volume(),
        data(),
        speed(),
        area(),
        time(),
        energy(),
    ]
}

fn currency() -> Category {
    Category {
        id: "currency",
        name: "Currency",
        tagline: "Reference rates, USD based",
        accent: "#6ba3ff",
        note: Some("Rates are for reference only (01/2025). Enter values manually if you need exact figures."),
        units: CURRENCY_RATES
            .iter()
            .map(|&(id, label, rate)| Unit::ratio(id, label, rate))
            .collect(),
    }
}

fn length() -> Category {
    Category {
        id: "length",
        name: "Length",
        tagline: "Measuring and travel",
        accent: "#5de1c0",
        note: None,
        units: vec![
            Unit::base("m", "Metre (m)"),
            Unit::scaled("km", "Kilometre (km)", 1000.0),
            Unit::ratio("cm", "Centimetre (cm)", 100.0),
            Unit::ratio("mm", "Millimetre (mm)", 1000.0),
            Unit::scaled("ft", "Foot (ft)", 0.3048),
            Unit::scaled("mi", "Mile (mi)", 1609.344),
        ],
    }
}

fn mass() -> Category {
    Category {
        id: "mass",
        name: "Mass",
        tagline: "Kitchen and lab",
        accent: "#f7c266",
        note: None,
        units: vec![
            Unit::base("kg", "Kilogram (kg)"),
            Unit::ratio("g", "Gram (g)", 1000.0),
            Unit::ratio("mg", "Milligram (mg)", 1_000_000.0),
            Unit::scaled("lb", "Pound (lb)", 0.45359237),
            Unit::scaled("oz", "Ounce (oz)", 0.0283495),
            Unit::scaled("t", "Tonne (t)", 1000.0),
        ],
    }
}

fn temperature() -> Category {
    Category {
        id: "temperature",
        name: "Temperature",
        tagline: "Celsius, Fahrenheit, Kelvin",
        accent: "#ff7ab8",
        note: None,
        units: vec![
            Unit::base("c", "Celsius (°C)"),
            Unit::affine("f", "Fahrenheit (°F)", 32.0, 5.0, 9.0),
            Unit::affine("k", "Kelvin (K)", 273.15, 1.0, 1.0),
        ],
    }
}

fn volume() -> Category {
    Category {
        id: "volume",
        name: "Volume",
        tagline: "Mixing and measuring",
        accent: "#8c85ff",
        note: None,
        units: vec![
            Unit::base("l", "Litre (L)"),
            Unit::ratio("ml", "Millilitre (mL)", 1000.0),
            Unit::scaled("m3", "Cubic metre (m³)", 1000.0),
            Unit::scaled("gal", "Gallon (US)", 3.78541),
            Unit::scaled("cup", "Cup (US)", 0.236588),
        ],
    }
}

fn data() -> Category {
    Category {
        id: "data",
        name: "Data",
        tagline: "Bandwidth and storage",
        accent: "#62d6ff",
        note: None,
        units: vec![
            Unit::base("b", "Bit (b)"),
            Unit::scaled("kb", "Kilobit (Kb)", 1000.0),
            Unit::scaled("mb", "Megabit (Mb)", 1_000_000.0),
            Unit::scaled("kib", "Kibibit (Kib)", 1024.0).with_hint("1 Kib = 1024 bits"),
            Unit::scaled("byte", "Byte (B)", 8.0),
            Unit::scaled("mbyte", "Megabyte (MB)", 8_000_000.0).with_hint("Decimal megabyte, 10^6 bytes"),
        ],
    }
}

fn speed() -> Category {
    Category {
        id: "speed",
        name: "Speed",
        tagline: "Travel and traffic",
        accent: "#ffb347",
        note: None,
        units: vec![
            Unit::base("ms", "Metre/second (m/s)"),
            Unit::ratio("kmh", "Kilometre/hour (km/h)", 3.6),
            Unit::scaled("mph", "Mile/hour (mph)", 0.44704),
            Unit::scaled("knot", "Knot (kn)", 0.514444).with_hint("One nautical mile per hour"),
        ],
    }
}

fn area() -> Category {
    Category {
        id: "area",
        name: "Area",
        tagline: "Maps and construction",
        accent: "#55c595",
        note: None,
        units: vec![
            Unit::base("m2", "Square metre (m²)"),
            Unit::ratio("cm2", "Square centimetre (cm²)", 10_000.0),
            Unit::scaled("km2", "Square kilometre (km²)", 1_000_000.0),
            Unit::scaled("ha", "Hectare (ha)", 10_000.0),
            Unit::scaled("ft2", "Square foot (ft²)", 0.092903),
            Unit::scaled("in2", "Square inch (in²)", 0.00064516),
        ],
    }
}

fn time() -> Category {
    Category {
        id: "time",
        name: "Time",
        tagline: "Scheduling and planning",
        accent: "#6ba3ff",
        note: None,
        units: vec![
            Unit::base("s", "Second (s)"),
            Unit::scaled("min", "Minute (min)", 60.0),
            Unit::scaled("h", "Hour (h)", 3600.0),
            Unit::scaled("day", "Day", 86_400.0),
            Unit::scaled("week", "Week", 604_800.0),
        ],
    }
}

fn energy() -> Category {
    Category {
        id: "energy",
        name: "Energy",
        tagline: "Electricity and calories",
        accent: "#e76f51",
        note: Some("Small calories (cal) measure energy; 1 kcal = 1000 cal."),
        units: vec![
            Unit::base("j", "Joule (J)"),
            Unit::scaled("kj", "Kilojoule (kJ)", 1000.0),
            Unit::scaled("wh", "Watt-hour (Wh)", 3600.0),
            Unit::scaled("kwh", "Kilowatt-hour (kWh)", 3_600_000.0),
            Unit::scaled("cal", "Small calorie (cal)", 4.184),
            Unit::scaled("kcal", "Kilocalorie (kcal)", 4184.0).with_hint("The food Calorie"),
        ],
    }
}
