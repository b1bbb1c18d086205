//! Compiled-in emission factors.
//!
//! Factors are kg CO2e per one unit. They are shared by every item in a
//! category; the table does not distinguish, say, beef from rice.

use footprint_types::CategoryKey;

use super::{Catalog, CategoryDefinition, ItemOption, UnitOption};

const COOKING_ITEMS: &[ItemOption] = &[
    ItemOption::fixed("charcoal", "Charcoal"),
    ItemOption::fixed("firewood", "Firewood"),
    ItemOption::fixed("lpg", "LPG (Gas Cylinder)"),
    ItemOption::fixed("kerosene", "Kerosene"),
    ItemOption::fixed("biogas", "Biogas"),
    ItemOption::fixed("electricity_cooking", "Electricity (Stove)"),
    ItemOption::fixed("other_cooking_fuel", "Other Cooking Fuel"),
];

const COOKING_UNITS: &[UnitOption] = &[
    UnitOption::fixed("kg_fuel", "kg (Charcoal, Firewood)", 2.75),
    UnitOption::fixed("liters_kerosene", "Liters (Kerosene)", 2.52),
    UnitOption::fixed("cylinder_6kg_lpg", "6kg Cylinder (LPG)", 18.0),
    UnitOption::fixed("cylinder_13kg_lpg", "13kg Cylinder (LPG)", 39.0),
    UnitOption::fixed("kwh_cooking", "kWh (Electricity for cooking)", 0.5),
    UnitOption::fixed("m3_biogas", "m³ (Biogas)", 0.1),
];

const FOOD_ITEMS: &[ItemOption] = &[
    ItemOption::fixed("beef", "Beef"),
    ItemOption::fixed("lamb_mutton", "Lamb/Mutton"),
    ItemOption::fixed("pork", "Pork"),
    ItemOption::fixed("poultry", "Poultry (Chicken, Turkey)"),
    ItemOption::fixed("fish_farmed", "Fish (Farmed)"),
    ItemOption::fixed("fish_wild", "Fish (Wild Caught)"),
    ItemOption::fixed("eggs", "Eggs"),
    ItemOption::fixed("dairy_milk", "Milk (Dairy)"),
    ItemOption::fixed("dairy_cheese", "Cheese"),
    ItemOption::fixed("rice", "Rice"),
    ItemOption::fixed("wheat_bread", "Wheat/Bread"),
    ItemOption::fixed("maize_corn", "Maize/Corn"),
    ItemOption::fixed("vegetables_local", "Vegetables (Local)"),
    ItemOption::fixed("fruits_local", "Fruits (Local)"),
    ItemOption::fixed("imported_food", "Imported Food Item"),
    ItemOption::fixed("processed_snack", "Processed Snack/Meal"),
];

// kg_food is a placeholder average across very different foods.
const FOOD_UNITS: &[UnitOption] = &[
    UnitOption::fixed("kg_food", "kg", 5.0),
    UnitOption::fixed("g_food", "grams (g)", 0.005),
    UnitOption::fixed("liters_milk", "Liters (Milk)", 1.4),
    UnitOption::fixed("dozen_eggs", "Dozen (Eggs)", 2.5),
    UnitOption::fixed("serving_food", "Serving / Portion", 0.8),
    UnitOption::fixed("item_food_generic", "Single Item (Generic)", 0.3),
];

const WASTE_ITEMS: &[ItemOption] = &[
    ItemOption::fixed("general_waste_landfill", "General Waste (to Landfill)"),
    ItemOption::fixed("organic_waste_composted", "Organic Waste (Composted)"),
    ItemOption::fixed("plastic_recycled", "Plastic Waste (Recycled)"),
    ItemOption::fixed("plastic_landfill", "Plastic Waste (to Landfill)"),
    ItemOption::fixed("paper_recycled", "Paper Waste (Recycled)"),
    ItemOption::fixed("paper_landfill", "Paper Waste (to Landfill)"),
    ItemOption::fixed("glass_recycled", "Glass Waste (Recycled)"),
    ItemOption::fixed("metal_recycled", "Metal Waste (Recycled)"),
    ItemOption::fixed("ewaste", "E-waste (e.g., phone, charger)"),
];

// Bin sizes are multiples of the mixed municipal landfill rate (0.58 per kg).
const WASTE_UNITS: &[UnitOption] = &[
    UnitOption::fixed("kg_waste", "kg", 0.58),
    UnitOption::fixed("bin_small_waste", "Small Bin Full (approx 5kg)", 2.9),
    UnitOption::fixed("bin_large_waste", "Large Bin Full (approx 20kg)", 11.6),
    UnitOption::fixed("item_ewaste", "Single E-waste Item", 5.0),
];

const CLOTHING_ITEMS: &[ItemOption] = &[
    ItemOption::fixed("tshirt_cotton_new", "T-shirt, Cotton (New)"),
    ItemOption::fixed("jeans_denim_new", "Jeans, Denim (New)"),
    ItemOption::fixed("dress_synthetic_new", "Dress, Synthetic (New)"),
    ItemOption::fixed("shoes_leather_new", "Shoes, Leather (New)"),
    ItemOption::fixed("shoes_synthetic_new", "Shoes, Synthetic (New)"),
    ItemOption::fixed("clothing_generic_new", "Generic Clothing Item (New)"),
    ItemOption::fixed("second_hand_clothing", "Second-hand Clothing Item"),
];

const CLOTHING_UNITS: &[UnitOption] = &[UnitOption::fixed("item_clothing", "Single Item", 6.5)];

const NECESSITIES_ITEMS: &[ItemOption] = &[
    ItemOption::fixed("toiletries_generic", "Toiletries (e.g., soap, toothpaste)"),
    ItemOption::fixed("cleaning_products_generic", "Cleaning Products"),
    ItemOption::fixed("stationery_generic", "Stationery (e.g., notebook, pens)"),
    ItemOption::fixed(
        "electronics_small_generic",
        "Small Electronics (e.g., charger, cable)",
    ),
    ItemOption::fixed("disposable_product", "Single-use Disposable Product"),
];

const NECESSITIES_UNITS: &[UnitOption] = &[UnitOption::fixed("item_necessity", "Single Item", 1.2)];

const TRANSPORT_ITEMS: &[ItemOption] = &[
    ItemOption::fixed("car_petrol_solo", "Car (Petrol, solo)"),
    ItemOption::fixed("car_diesel_solo", "Car (Diesel, solo)"),
    ItemOption::fixed("car_electric_solo", "Car (Electric, solo)"),
    ItemOption::fixed("car_shared", "Car (Shared/Ride-hail)"),
    ItemOption::fixed("motorcycle_boda", "Motorcycle/Boda-boda"),
    ItemOption::fixed("bus_matatu_public", "Bus/Matatu (Public)"),
    ItemOption::fixed("train_public", "Train (Public)"),
    ItemOption::fixed("bicycle_transport", "Bicycle"),
    ItemOption::fixed("walking_transport", "Walking"),
    ItemOption::fixed("flight_domestic", "Flight (Domestic)"),
    ItemOption::fixed("flight_short_intl", "Flight (Short Haul International)"),
    ItemOption::fixed("flight_long_intl", "Flight (Long Haul International)"),
];

// km_transport is an average petrol car; miles_transport is the same rate per mile.
const TRANSPORT_UNITS: &[UnitOption] = &[
    UnitOption::fixed("km_transport", "km", 0.17),
    UnitOption::fixed("miles_transport", "Miles", 0.27),
    UnitOption::fixed("trip_urban", "Urban Trip (Typical)", 1.5),
    UnitOption::fixed("trip_intercity", "Intercity Trip (Typical)", 25.0),
    UnitOption::fixed("passenger_km_flight", "Passenger-km (Flight)", 0.15),
];

const TABLE: &[(CategoryKey, &str, &[ItemOption], &[UnitOption])] = &[
    (CategoryKey::Cooking, "Cooking Fuel", COOKING_ITEMS, COOKING_UNITS),
    (CategoryKey::Food, "Food Consumption", FOOD_ITEMS, FOOD_UNITS),
    (CategoryKey::Waste, "Waste Generation", WASTE_ITEMS, WASTE_UNITS),
    (CategoryKey::Clothing, "Clothing & Apparel", CLOTHING_ITEMS, CLOTHING_UNITS),
    (CategoryKey::Necessities, "Daily Necessities", NECESSITIES_ITEMS, NECESSITIES_UNITS),
    (CategoryKey::Transport, "Transport", TRANSPORT_ITEMS, TRANSPORT_UNITS),
];

pub(super) fn catalog() -> Catalog {
    let categories = TABLE
        .iter()
        .map(|&(key, label, items, units)| {
            CategoryDefinition::new(key, label, items.to_vec(), units.to_vec())
                .expect("built-in category definitions are valid")
        })
        .collect();
    Catalog::new(categories).expect("built-in categories are unique")
}
