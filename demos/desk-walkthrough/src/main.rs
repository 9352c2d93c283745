//! Walkthrough of a Prompt Desk session: seeding, searching, editing, and deleting.
//!
//! Pass a JSON config path as the first argument to load your own seed data;
//! otherwise the sample library is used.

use anyhow::{Context, Result};
use prompt_desk::config::SessionConfig;
use prompt_desk::session::{AlwaysConfirm, MemoryClipboard, PromptDesk, SubmitOutcome};
use prompt_desk::store::Prompt;
use prompt_desk::telemetry::{TelemetryConfig, init_tracing};
use tracing::info;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::from_path(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => SessionConfig::sample(),
    }
    .apply_env_overrides();

    init_tracing(&TelemetryConfig::from(&config));

    println!("=== Prompt Desk Walkthrough ===\n");

    let mut desk = PromptDesk::builder()
        .default_category_color(config.default_category_color.clone())
        .seed(config.seed.clone())
        .clipboard(MemoryClipboard::new())
        .confirmation(AlwaysConfirm)
        .build()?;

    list_library(&desk);
    create_through_form(&mut desk)?;
    search_and_filter(&mut desk);
    edit_and_delete(&mut desk)?;

    Ok(())
}

fn list_library(desk: &PromptDesk) {
    println!("--- Library ---\n");
    for category in desk.categories() {
        println!("[{}] {} ({})", category.id(), category.name(), category.color());
    }
    println!();
    for prompt in desk.prompts() {
        print_prompt(prompt);
    }
}

fn create_through_form(desk: &mut PromptDesk) -> Result<()> {
    println!("\n--- Create via form ---\n");

    let category = desk.create_category_with_default_color("Walkthrough")?.id();

    desk.open_create_form();
    let form = desk.form_mut();
    form.set_title("Release notes");
    form.set_content("Summarise the following changelog for end users.");
    form.set_category(Some(category));
    for tag in ["docs", "release", "docs"] {
        form.tags_mut().set_input(tag);
        form.tags_mut().commit();
    }

    match desk.submit_form()? {
        SubmitOutcome::Created(id) => info!(prompt_id = %id, "walkthrough prompt created"),
        other => println!("unexpected outcome: {other:?}"),
    }
    if let Some(prompt) = desk.prompts().last() {
        print_prompt(prompt);
    }
    Ok(())
}

fn search_and_filter(desk: &mut PromptDesk) {
    println!("\n--- Search ---\n");

    for term in ["seo", "release", "nothing-matches"] {
        desk.set_search_term(term);
        let titles: Vec<_> = desk.visible_prompts().iter().map(|p| p.title()).collect();
        println!("{term:>16}: {titles:?}");
    }
    desk.set_search_term("");
}

fn edit_and_delete(desk: &mut PromptDesk) -> Result<()> {
    println!("\n--- Edit, copy, delete ---\n");

    let Some(id) = desk.prompts().first().map(Prompt::id) else {
        println!("library is empty");
        return Ok(());
    };

    desk.open_edit_form(id);
    desk.form_mut().set_title("Edited title");
    desk.close_form();
    println!("after cancelled edit: {:?}", desk.prompt(id).map(Prompt::title));

    desk.open_edit_form(id);
    desk.form_mut().tags_mut().set_input("edited");
    desk.form_mut().tags_mut().commit();
    let outcome = desk.submit_form()?;
    println!("submit outcome: {outcome:?}");

    desk.copy_prompt(id);
    println!("delete outcome: {:?}", desk.delete_prompt(id));
    println!("prompts remaining: {}", desk.prompts().len());
    Ok(())
}

fn print_prompt(prompt: &Prompt) {
    println!(
        "{} [category {}] tags={:?}\n    {}",
        prompt.title(),
        prompt.category(),
        prompt.tags(),
        prompt.content()
    );
}
