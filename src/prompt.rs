//! Interactive assessment form.
//!
//! Every prompt is seeded from the previous submission, so a rejected
//! assessment can be revised without retyping it.

use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::input::InputError;
use crate::model::assessment::AssessmentInput;
use crate::model::profile::{
    GapProfile, NO_SELECTION, POINTS_BUDGET, POINTS_MAX, RATING_MAX, RATING_MIN,
};
use crate::model::role::RoleCatalog;
use crate::pipeline::stage1_validate::ValidationReport;
use crate::taxonomy::BehaviorTaxonomy;

fn map_dialoguer_err(e: dialoguer::Error) -> InputError {
    InputError::Io(e.into())
}

fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

pub fn prompt_assessment(
    term: &Term,
    catalog: &RoleCatalog,
    taxonomy: &BehaviorTaxonomy,
    profile: &GapProfile,
    previous: &AssessmentInput,
) -> Result<AssessmentInput, InputError> {
    let theme = prompt_theme();
    let mut form = previous.clone();

    form.name = Input::<String>::with_theme(&theme)
        .with_prompt("Full name")
        .with_initial_text(previous.name.clone())
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)?;

    let areas = catalog.areas();
    form.area = select_option(term, &theme, "Area", &areas, previous.area.as_deref())?;

    form.role = match form.area.as_deref() {
        Some(area) => {
            let titles = catalog.titles_in_area(area);
            let keep = previous.role.as_deref().filter(|_| form.area == previous.area);
            select_option(term, &theme, "Current role", &titles, keep)?
        }
        None => None,
    };

    term.write_line(&format!(
        "\n{}",
        style(format!(
            "Distribute {} points across the {} competencies",
            POINTS_BUDGET,
            catalog.competencies.len()
        ))
        .bold()
    ))?;
    for (idx, comp) in catalog.competencies.competencies.iter().enumerate() {
        let value = Input::<i64>::with_theme(&theme)
            .with_prompt(comp.label.as_str())
            .default(previous.points.points[idx])
            .validate_with(|v: &i64| -> Result<(), String> {
                if (0..=POINTS_MAX).contains(v) {
                    Ok(())
                } else {
                    Err(format!("enter a value between 0 and {}", POINTS_MAX))
                }
            })
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?;
        form.points.points[idx] = value;
        term.write_line(&format!(
            "  assigned: {} / {}",
            form.points.total(),
            POINTS_BUDGET
        ))?;
    }

    term.write_line(&format!(
        "\n{}",
        style(format!("Rate each behavior ({}-{})", RATING_MIN, RATING_MAX)).bold()
    ))?;
    for entry in taxonomy.entries.iter().filter(|e| !e.behaviors.is_empty()) {
        term.write_line(&format!("{}", style(&entry.label).underlined()))?;
        let slots = previous
            .ratings
            .entries
            .iter()
            .filter(|r| r.competency == entry.competency);
        for slot in slots {
            let behavior = slot.behavior;
            let current = slot.rating.unwrap_or(profile.default_rating);
            let value = Input::<i64>::with_theme(&theme)
                .with_prompt(behavior)
                .default(current)
                .validate_with(|v: &i64| -> Result<(), String> {
                    if (RATING_MIN..=RATING_MAX).contains(v) {
                        Ok(())
                    } else {
                        Err(format!("enter a rating between {} and {}", RATING_MIN, RATING_MAX))
                    }
                })
                .interact_text_on(term)
                .map_err(map_dialoguer_err)?;
            form.ratings.set(behavior, value);
        }
    }

    Ok(form)
}

/// Shows every failing check and asks whether to revise the answers.
pub fn confirm_revision(term: &Term, report: &ValidationReport) -> Result<bool, InputError> {
    for issue in &report.issues {
        term.write_line(&format!("{} {}", style("✗").red(), issue))?;
    }
    Confirm::with_theme(&prompt_theme())
        .with_prompt("Revise your answers?")
        .default(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

fn select_option(
    term: &Term,
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[String],
    current: Option<&str>,
) -> Result<Option<String>, InputError> {
    let mut items = Vec::with_capacity(options.len() + 1);
    items.push(NO_SELECTION);
    items.extend(options.iter().map(String::as_str));

    let default_idx = current
        .and_then(|c| items.iter().position(|o| *o == c))
        .unwrap_or(0);

    let picked = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(default_idx)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(match picked {
        0 => None,
        i => Some(items[i].to_string()),
    })
}
