//! Drink summary card: name, category, glass, ingredients, thumbnail.

use crate::api::Drink;

use super::text_truncate::truncate_to_display_width;

/// Context for rendering the drink summary.
#[derive(Debug, Clone, Copy)]
pub struct DrinkSummaryViewContext<'a> {
    /// Drink to describe.
    pub drink: &'a Drink,
    /// Maximum row width in columns.
    pub max_width: usize,
}

/// Component rendering the drink summary block.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrinkSummaryComponent;

impl DrinkSummaryComponent {
    /// Renders the summary, skipping fields the catalog left empty.
    #[must_use]
    pub fn view(ctx: &DrinkSummaryViewContext<'_>) -> String {
        let drink = ctx.drink;
        let mut lines = vec![drink.name.as_deref().unwrap_or("Unnamed drink").to_owned()];

        if let Some(category) = drink.category.as_deref() {
            lines.push(format!("Category: {category}"));
        }
        if let Some(glass) = drink.glass.as_deref() {
            lines.push(format!("Glass: {glass}"));
        }
        if !drink.ingredients.is_empty() {
            lines.push(format!("Ingredients: {}", drink.ingredients.join(", ")));
        }
        if let Some(thumbnail) = drink.thumbnail_url.as_deref() {
            lines.push(format!("Image: {thumbnail}"));
        }

        lines
            .iter()
            .map(|line| truncate_to_display_width(line, ctx.max_width))
            .fold(String::new(), |mut output, line| {
                output.push_str(&line);
                output.push('\n');
                output
            })
    }
}
