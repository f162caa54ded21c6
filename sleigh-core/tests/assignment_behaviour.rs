//! Behavioural tests for `AssignmentResolver`.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use geo::Coord;
use sleigh_core::{
    AssignedRecipient, AssignmentError, AssignmentResolver, Catalog, Item, ItemId, Recipient,
    RecipientId,
};

const FALLBACK: u32 = 0;
const TOY: u32 = 12;

#[derive(Debug, Default)]
struct AssignmentWorld {
    catalog: RefCell<Catalog>,
    recipients: RefCell<Vec<Recipient>>,
    result: RefCell<Option<Result<Vec<AssignedRecipient>, AssignmentError>>>,
}

fn catalog_of(items: &[(u32, f64, f64)]) -> Catalog {
    Catalog::new(
        items
            .iter()
            .map(|(id, weight, volume)| Item::new(ItemId::new(*id), *weight, *volume)),
    )
    .expect("fixture catalog must be valid")
}

fn recipient(id: u64, eligible: bool, item: u32) -> Recipient {
    Recipient::new(
        RecipientId::new(id),
        Coord { x: 10.0, y: 50.0 },
        eligible,
        ItemId::new(item),
    )
}

#[fixture]
fn world() -> AssignmentWorld {
    AssignmentWorld::default()
}

#[given("a catalog with a fallback item and a toy")]
fn catalog_with_fallback(#[from(world)] world: &AssignmentWorld) {
    *world.catalog.borrow_mut() = catalog_of(&[(FALLBACK, 0.5, 0.2), (TOY, 2.0, 1.0)]);
}

#[given("a catalog without the fallback item")]
fn catalog_without_fallback(#[from(world)] world: &AssignmentWorld) {
    *world.catalog.borrow_mut() = catalog_of(&[(TOY, 2.0, 1.0)]);
}

#[given("an eligible recipient asking for the toy")]
fn eligible_recipient(#[from(world)] world: &AssignmentWorld) {
    world
        .recipients
        .borrow_mut()
        .push(recipient(1, true, TOY));
}

#[given("an ineligible recipient asking for the toy")]
fn ineligible_recipient(#[from(world)] world: &AssignmentWorld) {
    world
        .recipients
        .borrow_mut()
        .push(recipient(2, false, TOY));
}

#[when("the recipients are resolved")]
fn resolve_recipients(#[from(world)] world: &AssignmentWorld) {
    let resolver = AssignmentResolver::new(ItemId::new(FALLBACK));
    let outcome = resolver.resolve(&world.recipients.borrow(), &world.catalog.borrow());
    world.result.replace(Some(outcome));
}

fn assigned_item(world: &AssignmentWorld) -> ItemId {
    let borrowed = world.result.borrow();
    let assigned = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("resolution should succeed");
    assigned.first().expect("one recipient").assigned_item
}

#[then("the recipient is assigned the toy")]
fn assigned_toy(#[from(world)] world: &AssignmentWorld) {
    assert_eq!(assigned_item(world), ItemId::new(TOY));
}

#[then("the recipient is assigned the fallback item")]
fn assigned_fallback(#[from(world)] world: &AssignmentWorld) {
    assert_eq!(assigned_item(world), ItemId::new(FALLBACK));
}

#[then("resolution fails because the fallback is missing")]
fn fallback_missing(#[from(world)] world: &AssignmentWorld) {
    let borrowed = world.result.borrow();
    let err = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("resolution should fail");
    assert_eq!(*err, AssignmentError::MissingFallback(ItemId::new(FALLBACK)));
}

#[scenario(path = "tests/features/assignment.feature", index = 0)]
fn eligible_keeps_request(world: AssignmentWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/assignment.feature", index = 1)]
fn ineligible_gets_fallback(world: AssignmentWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/assignment.feature", index = 2)]
fn missing_fallback_reported(world: AssignmentWorld) {
    let _ = world;
}
