use crate::{
    analysis::{self, Assumptions, CreditOutcome},
    cli::{
        format, output, prompts,
        table::{left, right, Table},
    },
    errors::FinmexError,
    storage::{CatalogStore, JsonCatalog},
};

pub fn debit(store: &JsonCatalog) -> Result<(), FinmexError> {
    let catalog = store.load_or_init()?;
    if catalog.debit.len() < 2 {
        return Err(FinmexError::NotEnoughCards {
            kind: "debit",
            needed: 2,
            found: catalog.debit.len(),
        });
    }

    let balance = prompts::positive_amount("Balance to hold for the comparison")?;
    let assumptions = Assumptions::default();

    output::section("Debit Card Comparison");
    output::info(format!("Balance compared: {}", format::money(balance)));
    output::blank_line();

    let mut table = Table::new(vec![
        left("Name"),
        left("Bank"),
        right("Nominal"),
        right("Real"),
        right("Projected"),
        left("Verdict"),
    ]);
    for card in &catalog.debit {
        let result = analysis::real_yield(card, balance, &assumptions);
        let verdict = if result.gains_value() {
            "GAINS"
        } else {
            "LOSES"
        };
        table.push_row(vec![
            card.name.clone(),
            card.bank.clone(),
            format::rate(card.yield_rate),
            format::percent(result.percent),
            format::money(result.projected_balance),
            verdict.to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}

pub fn credit(store: &JsonCatalog) -> Result<(), FinmexError> {
    let catalog = store.load_or_init()?;
    if catalog.credit.len() < 2 {
        return Err(FinmexError::NotEnoughCards {
            kind: "credit",
            needed: 2,
            found: catalog.credit.len(),
        });
    }

    let debt = prompts::positive_amount("Debt or purchase amount for the comparison")?;
    let payment = prompts::number("Planned monthly payment")?;
    let assumptions = Assumptions::default();

    output::section("Credit Card Comparison");
    output::info(format!("Debt compared: {}", format::money(debt)));
    output::info(format!("Monthly payment: {}", format::money(payment)));
    output::blank_line();

    let mut table = Table::new(vec![
        left("Name"),
        left("Bank"),
        right("CAT"),
        right("Net Cost"),
        right("Months"),
        right("Cashback"),
        left("Interest-free"),
    ]);
    for card in &catalog.credit {
        let result = analysis::credit_cost(card, debt, payment, &assumptions);
        let months = match result.outcome {
            CreditOutcome::PaidOff => result.months.to_string(),
            CreditOutcome::HorizonExceeded { .. } => format!("{}+", result.months),
        };
        table.push_row(vec![
            card.name.clone(),
            card.bank.clone(),
            format::rate(card.cat),
            format::money(result.net_cost),
            months,
            format::rate(card.cashback_rate),
            format::yes_no(card.interest_free_months).to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
