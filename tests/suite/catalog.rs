//! Built-in catalog shape and custom catalogs

use footprint_engine::{
    Catalog, CatalogError, CategoryDefinition, CategoryKey, Co2e, EntryForm, FieldEdit, ItemKey,
    ItemOption, OwnerId, UnitKey, UnitOption, Validator, compute_co2e,
};

#[test]
fn builtin_lists_every_category_in_order() {
    let keys: Vec<CategoryKey> = Catalog::builtin()
        .categories()
        .iter()
        .map(CategoryDefinition::key)
        .collect();
    assert_eq!(keys, CategoryKey::ALL);
}

#[test]
fn every_category_has_items_and_units() {
    let catalog = Catalog::builtin();
    for category in CategoryKey::ALL {
        assert!(!catalog.items_for(category).unwrap().is_empty(), "{category}");
        assert!(!catalog.units_for(category).unwrap().is_empty(), "{category}");
    }
}

#[test]
fn every_factor_is_finite_and_non_negative() {
    let catalog = Catalog::builtin();
    for category in CategoryKey::ALL {
        for unit in catalog.units_for(category).unwrap() {
            let factor = catalog.factor_for(category, unit.key()).unwrap();
            assert!(factor.is_finite() && factor >= 0.0, "{category}/{}", unit.key());
        }
    }
}

#[test]
fn documented_factors() {
    let catalog = Catalog::builtin();
    let cases = [
        (CategoryKey::Cooking, "kg_fuel", 2.75),
        (CategoryKey::Food, "kg_food", 5.0),
        (CategoryKey::Waste, "kg_waste", 0.58),
        (CategoryKey::Clothing, "item_clothing", 6.5),
        (CategoryKey::Necessities, "item_necessity", 1.2),
        (CategoryKey::Transport, "km_transport", 0.17),
    ];
    for (category, unit, factor) in cases {
        assert_eq!(
            catalog.factor_for(category, &UnitKey::from(unit)).unwrap(),
            factor
        );
    }
}

#[test]
fn foreign_unit_is_not_found() {
    let err = Catalog::builtin()
        .factor_for(CategoryKey::Food, &UnitKey::from("km_transport"))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, CatalogError::UnitNotFound { .. }));
}

#[test]
fn lookups_are_stable() {
    let catalog = Catalog::builtin();
    let first = catalog.units_for(CategoryKey::Transport).unwrap();
    let second = catalog.units_for(CategoryKey::Transport).unwrap();
    assert_eq!(first, second);
}

fn garden_catalog() -> Catalog {
    let garden = CategoryDefinition::new(
        CategoryKey::Necessities,
        "Garden",
        vec![ItemOption::new(ItemKey::from("compost"), "Compost")],
        vec![UnitOption::new(UnitKey::from("bag"), "Bag", 3.25)],
    )
    .unwrap();
    Catalog::new(vec![garden]).unwrap()
}

#[test]
fn custom_catalog_drives_the_whole_flow() {
    let catalog = garden_catalog();
    let mut form = EntryForm::new(&catalog, Validator::default());

    for edit in [
        FieldEdit::Category(CategoryKey::Necessities),
        FieldEdit::Item(ItemKey::from("compost")),
        FieldEdit::Unit(UnitKey::from("bag")),
        FieldEdit::Quantity(2.0),
    ] {
        form.apply(edit).unwrap();
    }
    assert_eq!(form.preview(), Co2e::from_kg(6.5));

    let entry = form.submit(&OwnerId::placeholder()).unwrap();
    assert_eq!(entry.item_label(), "Compost");
    assert_eq!(entry.unit_label(), "Bag");
}

#[test]
fn custom_catalog_knows_only_its_categories() {
    let catalog = garden_catalog();
    assert_eq!(
        catalog.category(CategoryKey::Food).unwrap_err(),
        CatalogError::CategoryNotFound(CategoryKey::Food)
    );
    assert_eq!(
        compute_co2e(&catalog, Some(CategoryKey::Food), Some(&UnitKey::from("bag")), 1.0),
        None
    );
}

#[test]
fn definitions_reject_bad_factors() {
    let err = CategoryDefinition::new(
        CategoryKey::Waste,
        "Waste",
        vec![ItemOption::new(ItemKey::from("glass"), "Glass")],
        vec![UnitOption::new(UnitKey::from("kg"), "kg", -1.0)],
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFactor { .. }));
}
