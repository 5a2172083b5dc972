#![cfg(test)]
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use kasir_common::Error;
use kasir_common::confirmation::CONFIRM_PROMPT;
use kasir_common::order::Table;
use kasir_core::{Amount, CheckOutcome, DiscountTier, Transaction};

/// Builds a transaction whose operator always types `answer`.
fn operator_answers(answer: &'static str) -> Transaction {
    Transaction::new(Box::new(move |_: &str| -> io::Result<String> {
        Ok(answer.to_string())
    }))
}

fn row_names(table: &Table) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|row| row.item.name().to_string())
        .collect()
}

/// Confirms an order holding `items` and returns the rendered total.
fn checkout(items: &[(&str, u64, u64)]) -> anyhow::Result<String> {
    let mut tx = operator_answers("y");
    for (name, quantity, price) in items {
        tx.add_item(name, *quantity, *price)?;
    }
    tx.check_order()?;
    Ok(tx.get_total_price()?.to_string())
}

#[test]
fn editing_session_keeps_view_in_sync() -> anyhow::Result<()> {
    let mut tx = operator_answers("n");

    let table = tx.add_item("Apple", 1, 10000)?;
    assert_eq!(table.len(), 1);
    let apple = &table.get(1).unwrap().item;
    assert_eq!(
        (apple.name(), apple.quantity(), apple.unit_price(), apple.line_total()),
        ("Apple", 1, 10000, 10000)
    );

    tx.add_item("Banana", 1, 20000)?;
    let table = tx.update_item_name("Banana", "Cherry")?;
    assert_eq!(row_names(&table), vec!["Apple", "Cherry"]);

    tx.update_item_qty("Cherry", 2)?;
    let table = tx.update_item_price("Cherry", 30000)?;
    let cherry = &table.get(2).unwrap().item;
    assert_eq!((cherry.quantity(), cherry.line_total()), (2, 60000));

    tx.add_item("Banana", 1, 20000)?;
    let table = tx.delete_item("Banana")?;
    assert_eq!(row_names(&table), vec!["Apple", "Cherry"]);

    let outcome = tx.check_order()?;
    assert_eq!(outcome, CheckOutcome::Declined);
    assert_eq!(outcome.to_string(), "\n");
    assert!(!tx.is_confirmed());
    Ok(())
}

#[test]
fn rows_are_numbered_in_insertion_order_after_renames() -> anyhow::Result<()> {
    let mut tx = operator_answers("y");
    for name in ["Apple", "Banana", "Cherry", "Duku"] {
        tx.add_item(name, 1, 1000)?;
    }
    let table = tx.update_item_name("Banana", "Blueberry")?;

    let numbered: Vec<(usize, &str)> = table
        .rows()
        .iter()
        .map(|row| (row.number, row.item.name()))
        .collect();
    assert_eq!(
        numbered,
        vec![(1, "Apple"), (2, "Blueberry"), (3, "Cherry"), (4, "Duku")]
    );
    Ok(())
}

#[test]
fn unknown_names_leave_the_order_alone() -> anyhow::Result<()> {
    let mut tx = operator_answers("y");
    tx.add_item("Apple", 1, 10000)?;
    let before = tx.view();

    tx.update_item_qty("Mango", 9)?;
    tx.update_item_price("Mango", 9)?;
    assert_eq!(tx.view(), before);
    Ok(())
}

#[test]
fn delete_spares_later_duplicates() -> anyhow::Result<()> {
    let mut tx = operator_answers("y");
    tx.add_item("Egg", 1, 2000)?;
    tx.add_item("Egg", 6, 2000)?;

    let table = tx.delete_item("Egg")?;
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(1).unwrap().item.quantity(), 6);
    Ok(())
}

#[test]
fn total_below_first_tier() -> anyhow::Result<()> {
    let total = checkout(&[("Apple", 1, 10000), ("Cherry", 2, 30000)])?;
    assert_eq!(total, "the total amount to be paid is Rp. 70000");
    Ok(())
}

#[test]
fn total_in_five_percent_tier() -> anyhow::Result<()> {
    let total = checkout(&[("Apple", 1, 10000), ("Banana", 7, 20000), ("Cherry", 2, 30000)])?;
    assert_eq!(total, "the total amount to be paid is Rp. 199500.0");
    Ok(())
}

#[test]
fn total_in_eight_percent_tier() -> anyhow::Result<()> {
    let total = checkout(&[
        ("Apple", 1, 10000),
        ("Banana", 7, 20000),
        ("Cherry", 2, 30000),
        ("Duku", 2, 50000),
    ])?;
    assert_eq!(total, "the total amount to be paid is Rp. 285200.0");
    Ok(())
}

#[test]
fn total_in_ten_percent_tier() -> anyhow::Result<()> {
    let total = checkout(&[
        ("Apple", 1, 10000),
        ("Banana", 7, 20000),
        ("Cherry", 2, 30000),
        ("Duku", 2, 50000),
        ("Egg", 5, 40000),
    ])?;
    assert_eq!(total, "the total amount to be paid is Rp. 459000.0");
    Ok(())
}

#[test]
fn discount_starts_just_above_two_hundred_thousand() -> anyhow::Result<()> {
    assert_eq!(
        checkout(&[("Rice", 1, 200000)])?,
        "the total amount to be paid is Rp. 200000"
    );
    assert_eq!(
        checkout(&[("Rice", 1, 200000), ("Candy", 1, 1)])?,
        "the total amount to be paid is Rp. 190000.95"
    );
    Ok(())
}

#[test]
fn priced_summary_exposes_tier_and_subtotal() -> anyhow::Result<()> {
    let mut tx = operator_answers("y");
    tx.add_item("Duku", 7, 50000)?;
    tx.check_order()?;

    let summary = tx.get_total_price()?;
    assert_eq!(summary.subtotal, 350000);
    assert_eq!(summary.tier, DiscountTier::Eight);
    assert_eq!(summary.total, Amount::Discounted(322000.0));
    Ok(())
}

#[test]
fn reset_returns_fixed_message() {
    let mut tx = operator_answers("y");
    tx.add_item("Apple", 1, 10000).unwrap();
    assert_eq!(tx.reset_transaction(), "All items have been successfully deleted!");
    assert!(tx.view().is_empty());
}

#[test]
fn reset_then_reorder_prices_only_new_items() -> anyhow::Result<()> {
    let mut tx = operator_answers("y");
    tx.add_item("Egg", 5, 40000)?;
    tx.check_order()?;
    tx.reset_transaction();
    assert!(matches!(tx.get_total_price(), Err(Error::InvalidInput)));

    tx.add_item("Apple", 1, 10000)?;
    tx.check_order()?;
    assert_eq!(
        tx.get_total_price()?.to_string(),
        "the total amount to be paid is Rp. 10000"
    );
    Ok(())
}

#[test]
fn confirming_empty_order_fails() {
    let mut tx = operator_answers("y");
    assert!(matches!(tx.check_order(), Err(Error::InvalidInput)));
}

#[test]
fn wrong_confirmation_answer_fails() {
    let mut tx = operator_answers("false");
    tx.add_item("Apple", 1, 10000).unwrap();
    assert!(matches!(tx.check_order(), Err(Error::InvalidInput)));
    assert!(!tx.is_confirmed());
}

#[test]
fn total_before_confirmation_fails() {
    let tx = operator_answers("y");
    let err = tx.get_total_price().unwrap_err();
    assert!(matches!(err, Error::InvalidInput));
    assert_eq!(err.to_string(), "There is a data input error");
}

#[test]
fn operator_is_asked_once_per_check() -> anyhow::Result<()> {
    let prompts: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let answers = RefCell::new(vec!["y", "n"]);
    let seen = Rc::clone(&prompts);

    let mut tx = Transaction::new(Box::new(move |prompt: &str| -> io::Result<String> {
        seen.borrow_mut().push(prompt.to_string());
        Ok(answers.borrow_mut().pop().unwrap_or("y").to_string())
    }));
    tx.add_item("Apple", 1, 10000)?;

    assert_eq!(tx.check_order()?, CheckOutcome::Declined);
    assert!(matches!(tx.check_order()?, CheckOutcome::Confirmed(_)));
    assert_eq!(*prompts.borrow(), vec![CONFIRM_PROMPT, CONFIRM_PROMPT]);
    Ok(())
}
