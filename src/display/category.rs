//! Category display formatting

use crate::models::CategoryRegistry;

/// Format the registry as a numbered list in registry order
pub fn format_category_list(registry: &CategoryRegistry) -> String {
    if registry.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::from("Categories:\n");
    for (i, name) in registry.all().iter().enumerate() {
        output.push_str(&format!("  {:>2}. {}\n", i + 1, name));
    }
    output
}
