use crate::{
    analysis::{self, Assumptions, CreditOutcome},
    catalog::CreditCard,
    cli::{
        format, output, prompts,
        table::{left, right, Table},
    },
    errors::FinmexError,
    storage::{CatalogStore, JsonCatalog},
};

pub fn add(store: &JsonCatalog) -> Result<(), FinmexError> {
    let mut catalog = store.load_or_init()?;

    let card = CreditCard {
        name: prompts::text("Card name")?,
        bank: prompts::text("Issuing bank")?,
        interest_rate: prompts::number("Annual interest rate (e.g. 0.36 for 36%)")?,
        cat: prompts::number("CAT (e.g. 0.45 for 45%)")?,
        annual_fee: prompts::number("Annual fee")?,
        credit_limit: prompts::number("Credit limit")?,
        cashback_rate: prompts::number("Cashback rate (e.g. 0.02 for 2%)")?,
        interest_free_months: prompts::confirm("Offers interest-free installments?", false)?,
    };

    let name = card.name.clone();
    catalog.add_credit(card);
    store.save(&catalog)?;
    tracing::info!(card = %name, "credit card added");

    output::success(format!("Credit card '{name}' added"));
    Ok(())
}

pub fn analyze(store: &JsonCatalog) -> Result<(), FinmexError> {
    let catalog = store.load_or_init()?;
    if catalog.credit.is_empty() {
        return Err(FinmexError::EmptySection("credit"));
    }

    let labels: Vec<String> = catalog
        .credit
        .iter()
        .map(|card| format!("{} ({})", card.name, card.bank))
        .collect();
    let card = &catalog.credit[prompts::pick("Select a card", &labels)?];

    let debt = prompts::positive_amount("Debt or purchase amount")?;
    let payment = prompts::number("Planned monthly payment")?;

    let assumptions = Assumptions::default();
    let minimum = debt * assumptions.minimum_payment_rate;
    if payment < minimum {
        output::warning(format!(
            "Payment is below the issuer minimum; adjusting to {}",
            format::money(minimum)
        ));
    }

    let result = analysis::credit_cost(card, debt, payment, &assumptions);

    output::section("Credit Cost Analysis");
    output::info(format!("Card: {} ({})", card.name, card.bank));
    output::info(format!("Debt/Purchase: {}", format::money(debt)));
    output::info(format!(
        "Annual interest rate: {}",
        format::rate(card.interest_rate)
    ));
    output::info(format!("CAT: {}", format::rate(card.cat)));
    output::info(format!(
        "Monthly payment: {}",
        format::money(result.effective_payment)
    ));
    output::info(format!("Time to pay off: {}", format::months(result.months)));

    if let CreditOutcome::HorizonExceeded { remaining } = result.outcome {
        output::warning(format!(
            "Debt is not paid off within {} months; {} would still be owed",
            assumptions.horizon_months,
            format::money(remaining)
        ));
    }

    if card.cashback_rate > 0.0 {
        output::info(format!(
            "Cashback benefit ({}): {}",
            format::rate(card.cashback_rate),
            format::money(result.cashback_benefit)
        ));
    }

    output::info(format!(
        "Total cost of credit: {} ({} of the original amount)",
        format::money(result.net_cost),
        format::percent(result.cost_percent)
    ));
    output::info(format!(
        "Total amount paid: {}",
        format::money(debt + result.net_cost)
    ));

    Ok(())
}

pub fn list(store: &JsonCatalog) -> Result<(), FinmexError> {
    let catalog = store.load_or_init()?;
    if catalog.credit.is_empty() {
        output::info("No credit cards registered yet");
        return Ok(());
    }

    let mut table = Table::new(vec![
        left("Name"),
        left("Bank"),
        right("Interest"),
        right("CAT"),
        right("Annual Fee"),
        right("Limit"),
        right("Cashback"),
        left("Interest-free"),
    ]);
    for card in &catalog.credit {
        table.push_row(vec![
            card.name.clone(),
            card.bank.clone(),
            format::rate(card.interest_rate),
            format::rate(card.cat),
            format::money(card.annual_fee),
            format::money(card.credit_limit),
            format::rate(card.cashback_rate),
            format::yes_no(card.interest_free_months).to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
