use crate::{
    analysis::{self, Assumptions},
    catalog::DebitCard,
    cli::{
        format, output, prompts,
        table::{left, right, Table},
    },
    errors::FinmexError,
    storage::{CatalogStore, JsonCatalog},
};

pub fn add(store: &JsonCatalog) -> Result<(), FinmexError> {
    let mut catalog = store.load_or_init()?;

    let card = DebitCard {
        name: prompts::text("Card name")?,
        bank: prompts::text("Issuing bank")?,
        yield_rate: prompts::number("Annual yield rate (e.g. 0.05 for 5%)")?,
        minimum_balance: prompts::number("Minimum balance required")?,
        annual_fee: prompts::number("Annual fee")?,
        inactivity_fee: prompts::number("Monthly inactivity fee")?,
    };

    let name = card.name.clone();
    catalog.add_debit(card);
    store.save(&catalog)?;
    tracing::info!(card = %name, "debit card added");

    output::success(format!("Debit card '{name}' added"));
    Ok(())
}

pub fn analyze(store: &JsonCatalog) -> Result<(), FinmexError> {
    let catalog = store.load_or_init()?;
    if catalog.debit.is_empty() {
        return Err(FinmexError::EmptySection("debit"));
    }

    let labels: Vec<String> = catalog
        .debit
        .iter()
        .map(|card| format!("{} ({})", card.name, card.bank))
        .collect();
    let card = &catalog.debit[prompts::pick("Select a card", &labels)?];

    let balance = prompts::positive_amount("Average balance to hold")?;
    let assumptions = Assumptions::default();
    let result = analysis::real_yield(card, balance, &assumptions);

    output::section("Yield Analysis");
    output::info(format!("Card: {} ({})", card.name, card.bank));
    output::info(format!("Nominal rate: {}", format::rate(card.yield_rate)));
    output::info(format!("Starting balance: {}", format::money(balance)));
    output::info(format!(
        "Gross annual yield: {}",
        format::money(balance * card.yield_rate)
    ));
    output::info(format!(
        "Tax withheld (ISR {}): {}",
        format::rate(assumptions.tax_rate),
        format::money(balance * card.yield_rate * assumptions.tax_rate)
    ));
    output::info(format!(
        "Inflation erosion ({}): {}",
        format::rate(assumptions.annual_inflation),
        format::money(balance * assumptions.annual_inflation)
    ));
    output::info(format!("Annual fee: {}", format::money(card.annual_fee)));
    output::info(format!(
        "Real annual yield: {} ({})",
        format::money(result.amount),
        format::percent(result.percent)
    ));

    if balance < card.minimum_balance {
        output::warning(format!(
            "Balance is below the {} minimum; no yield accrues but the fee still applies",
            format::money(card.minimum_balance)
        ));
    }

    if result.gains_value() {
        output::success(format!(
            "Your money GAINS real value ({} after one year)",
            format::money(result.projected_balance)
        ));
    } else {
        output::warning(format!(
            "Your money LOSES real value ({} after one year)",
            format::money(result.projected_balance)
        ));
    }

    Ok(())
}

pub fn list(store: &JsonCatalog) -> Result<(), FinmexError> {
    let catalog = store.load_or_init()?;
    if catalog.debit.is_empty() {
        output::info("No debit cards registered yet");
        return Ok(());
    }

    let mut table = Table::new(vec![
        left("Name"),
        left("Bank"),
        right("Yield"),
        right("Min. Balance"),
        right("Annual Fee"),
    ]);
    for card in &catalog.debit {
        table.push_row(vec![
            card.name.clone(),
            card.bank.clone(),
            format::rate(card.yield_rate),
            format::money(card.minimum_balance),
            format::money(card.annual_fee),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
