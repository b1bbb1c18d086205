//! Selection, preview, validation, and submission through the public API

use footprint_engine::{
    CategoryKey, Co2e, FieldEdit, FieldError, ItemKey, MinQuantity, OwnerId, SelectionError,
    SelectionState, SubmitError, UnitKey, Validator,
};

use crate::common::{apply_all, fixed_form, fixed_form_with, fixed_now};

#[test]
fn cooking_charcoal_two_kilos() {
    let mut form = fixed_form();
    apply_all(
        &mut form,
        [
            FieldEdit::Category(CategoryKey::Cooking),
            FieldEdit::Item(ItemKey::from("charcoal")),
            FieldEdit::Unit(UnitKey::from("kg_fuel")),
            FieldEdit::Quantity(2.0),
        ],
    );
    assert_eq!(form.preview(), Co2e::from_kg(5.5));

    let entry = form.submit(&OwnerId::placeholder()).unwrap();

    assert_eq!(entry.co2e().kg(), 5.5);
    assert_eq!(entry.owner_id().as_str(), "mock-user-id");
    assert_eq!(entry.created_at(), fixed_now());
    assert_eq!(entry.id().as_str(), "entry-1");
}

#[test]
fn transport_ten_kilometres() {
    let mut form = fixed_form();
    apply_all(
        &mut form,
        [
            FieldEdit::Category(CategoryKey::Transport),
            FieldEdit::Item(ItemKey::from("car_petrol_solo")),
            FieldEdit::Unit(UnitKey::from("km_transport")),
            FieldEdit::Quantity(10.0),
        ],
    );
    let entry = form.submit(&OwnerId::placeholder()).unwrap();
    assert_eq!(entry.co2e().kg(), 1.7);
}

#[test]
fn entry_co2e_matches_rounded_product() {
    let cases = [
        (CategoryKey::Food, "beef", "g_food", 250.0, 1.25),
        (CategoryKey::Waste, "plastic_recycled", "kg_waste", 3.0, 1.74),
        (CategoryKey::Necessities, "stationery_generic", "item_necessity", 3.0, 3.6),
        (CategoryKey::Clothing, "tshirt_cotton_new", "item_clothing", 1.0, 6.5),
    ];
    for (category, item, unit, quantity, expected) in cases {
        let mut form = fixed_form();
        apply_all(
            &mut form,
            [
                FieldEdit::Category(category),
                FieldEdit::Item(ItemKey::from(item)),
                FieldEdit::Unit(UnitKey::from(unit)),
                FieldEdit::Quantity(quantity),
            ],
        );
        let entry = form.submit(&OwnerId::placeholder()).unwrap();
        assert_eq!(entry.co2e().kg(), expected, "{category}/{item}/{unit}");
    }
}

#[test]
fn zero_quantity_builds_nothing() {
    let mut form = fixed_form();
    apply_all(
        &mut form,
        [
            FieldEdit::Category(CategoryKey::Waste),
            FieldEdit::Item(ItemKey::from("plastic_recycled")),
            FieldEdit::Unit(UnitKey::from("kg_waste")),
            FieldEdit::Quantity(0.0),
        ],
    );
    assert!(form.preview().is_none());
    assert_eq!(form.state(), SelectionState::Invalid);

    match form.submit(&OwnerId::placeholder()) {
        Err(SubmitError::Invalid(errors)) => {
            assert_eq!(errors.as_slice(), [FieldError::QuantityNotPositive]);
            assert_eq!(errors.to_string(), "quantity: quantity must be greater than 0");
        }
        other => panic!("expected field errors, got {other:?}"),
    }
}

#[test]
fn foreign_unit_is_rejected_and_state_kept() {
    let mut form = fixed_form();
    apply_all(&mut form, [FieldEdit::Category(CategoryKey::Food)]);
    let before = form.selection().clone();

    let err = form
        .apply(FieldEdit::Unit(UnitKey::from("km_transport")))
        .unwrap_err();

    assert!(matches!(err, SelectionError::InvalidSelection { .. }));
    assert_eq!(form.selection(), &before);
    assert_eq!(form.state(), SelectionState::CategoryChosen);
}

#[test]
fn category_switch_clears_and_hides_preview() {
    let mut form = fixed_form();
    apply_all(
        &mut form,
        [
            FieldEdit::Category(CategoryKey::Cooking),
            FieldEdit::Item(ItemKey::from("charcoal")),
            FieldEdit::Unit(UnitKey::from("kg_fuel")),
            FieldEdit::Quantity(3.0),
        ],
    );
    apply_all(&mut form, [FieldEdit::Category(CategoryKey::Clothing)]);

    assert!(form.selection().item().is_none());
    assert!(form.selection().unit().is_none());
    assert_eq!(form.selection().quantity(), 3.0);
    assert!(form.preview().is_none());

    apply_all(&mut form, [FieldEdit::Unit(UnitKey::from("item_clothing"))]);
    assert_eq!(form.preview(), Co2e::from_kg(19.5));
}

#[test]
fn reselecting_category_changes_nothing() {
    let mut form = fixed_form();
    apply_all(
        &mut form,
        [
            FieldEdit::Category(CategoryKey::Food),
            FieldEdit::Item(ItemKey::from("beef")),
        ],
    );
    let once = form.selection().clone();
    apply_all(&mut form, [FieldEdit::Category(CategoryKey::Food)]);
    assert_eq!(form.selection(), &once);
}

#[test]
fn configured_minimum_is_enforced_on_submit_only() {
    let mut form = fixed_form_with(Validator::new(MinQuantity::new(1.0).unwrap()));
    apply_all(
        &mut form,
        [
            FieldEdit::Category(CategoryKey::Transport),
            FieldEdit::Item(ItemKey::from("bus_matatu_public")),
            FieldEdit::Unit(UnitKey::from("km_transport")),
            FieldEdit::Quantity(0.6),
        ],
    );
    assert_eq!(form.preview(), Co2e::from_kg(0.1));

    let err = form.submit(&OwnerId::placeholder()).unwrap_err();
    assert_eq!(
        err,
        SubmitError::Invalid(
            footprint_engine::FieldErrors::from_vec(vec![FieldError::QuantityBelowMinimum {
                min: 1.0
            }])
            .unwrap()
        )
    );
}

#[test]
fn blank_notes_are_dropped() {
    let mut form = fixed_form();
    apply_all(
        &mut form,
        [
            FieldEdit::Category(CategoryKey::Necessities),
            FieldEdit::Item(ItemKey::from("stationery_generic")),
            FieldEdit::Unit(UnitKey::from("item_necessity")),
            FieldEdit::Quantity(1.0),
            FieldEdit::Notes("   ".to_string()),
        ],
    );
    let entry = form.submit(&OwnerId::placeholder()).unwrap();
    assert!(entry.notes().is_none());
}

#[test]
fn entry_json_shape() {
    let mut form = fixed_form();
    apply_all(
        &mut form,
        [
            FieldEdit::Category(CategoryKey::Cooking),
            FieldEdit::Item(ItemKey::from("charcoal")),
            FieldEdit::Unit(UnitKey::from("kg_fuel")),
            FieldEdit::Quantity(2.0),
            FieldEdit::Notes("market run".to_string()),
        ],
    );
    let entry = form.submit(&OwnerId::new("uid-9").unwrap()).unwrap();

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], "entry-1");
    assert_eq!(json["owner_id"], "uid-9");
    assert_eq!(json["created_at"], "2024-05-01T08:30:00Z");
    assert_eq!(json["category"], "cooking");
    assert_eq!(json["item"], "charcoal");
    assert_eq!(json["item_label"], "Charcoal");
    assert_eq!(json["unit"], "kg_fuel");
    assert_eq!(json["co2e"], 5.5);
    assert_eq!(json["notes"], "market run");
}
