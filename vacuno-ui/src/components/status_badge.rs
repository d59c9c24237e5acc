//! Status badge for a record's `estado`.

use leptos::*;
use vacuno::models::Estado;

fn badge_class(estado: Estado) -> &'static str {
    match estado {
        Estado::Activa => "bg-green-700 text-green-100",
        Estado::Enferma => "bg-red-700 text-red-100",
        Estado::Vendida => "bg-blue-700 text-blue-100",
        Estado::Fallecida => "bg-gray-600 text-gray-200",
    }
}

#[component]
pub fn StatusBadge(estado: Estado) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 rounded text-xs font-medium {}", badge_class(estado))>
            {estado.label()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_distinct_badge() {
        let classes: Vec<&str> = [Estado::Activa, Estado::Enferma, Estado::Vendida, Estado::Fallecida]
            .into_iter()
            .map(badge_class)
            .collect();

        for (i, class) in classes.iter().enumerate() {
            assert!(!classes[i + 1..].contains(class));
        }
    }
}
