use maud::{html, Markup, DOCTYPE};

use crate::{
    models::Todo,
    theme::{ColorScheme, Palette},
};

const TITLE: &str = "Todos";

pub fn page(todos: &[Todo], scheme: ColorScheme) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                script src="https://unpkg.com/htmx.org@1.9.10" {}
                script src="https://cdn.tailwindcss.com" {}
            }
            (body(todos, scheme))
        }
    }
}

// swapped in whole when the theme changes
pub fn body(todos: &[Todo], scheme: ColorScheme) -> Markup {
    let palette = scheme.palette();
    html! {
        body class="font-sans leading-normal tracking-normal" style=(body_style(&palette)) {
            div class="container mx-auto max-w-screen-lg p-8" {
                (input_bar(scheme))
                div id="todos" class="mt-6" {
                    (todos_html(todos))
                }
            }
        }
    }
}

fn body_style(palette: &Palette) -> String {
    format!(
        "background-color: {}; color: {}; --muted: {}; --border: {};",
        palette.background, palette.text, palette.muted, palette.border
    )
}

// text entry, the add button, and the theme switch
fn input_bar(scheme: ColorScheme) -> Markup {
    let (icon, label) = match scheme {
        ColorScheme::Dark => ("☀", "Switch to light theme"),
        ColorScheme::Light => ("☾", "Switch to dark theme"),
    };
    html! {
        div class="flex items-center gap-2" {
            form class="flex flex-grow items-center" hx-put="/create_todo" hx-target="#todos" hx-swap="innerHTML" "hx-on::after-request"="this.reset()" {
                input class="w-full rounded border p-2 mr-2 bg-transparent" style="border-color: var(--border)" type="text" name="title" placeholder="Add a todo..." required;
                button class="bg-white text-gray-800 font-bold py-2 px-4 rounded" type="submit" { "Add" }
            }
            button class="text-3xl w-10 select-none" title=(label) hx-post="/toggle_theme" hx-target="body" hx-swap="outerHTML" { (icon) }
        }
    }
}

// a single line item in the todo list
pub fn todo_html(todo: &Todo) -> Markup {
    html! {
        li class="flex items-center justify-between gap-1 rounded border-2 my-1 p-2" style="border-color: var(--border)" {
            span class="flex-grow text-xl" style=(if todo.completed { "text-decoration: line-through; color: var(--muted)" } else { "" }) {
                (todo.title)
            }
            button class="border rounded py-1 px-2" hx-post="/toggle_todo" hx-target="closest li" hx-swap="outerHTML" hx-vals=(serde_json::json!({ "id": todo.id })) {
                @if todo.completed { "Undo" } @else { "Done" }
            }
            button class="bg-orange-600 hover:bg-orange-700 text-white font-bold py-1 px-2 rounded" hx-delete="/remove_todo" hx-target="closest li" hx-swap="outerHTML" hx-vals=(serde_json::json!({ "id": todo.id })) { "Remove" }
        }
    }
}

pub fn todos_html(todos: &[Todo]) -> Markup {
    html! {
        ul class="list-none p-0" {
            @for todo in todos {
                (todo_html(todo))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_escapes_title() {
        let todo = Todo::new(3, "<b>bold</b>".to_string());
        let markup = todo_html(&todo).into_string();
        assert!(markup.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(markup.contains("Done"));
        assert!(!markup.contains("line-through"));
    }

    #[test]
    fn test_completed_todo_is_struck_through() {
        let mut todo = Todo::new(3, "walk".to_string());
        todo.completed = true;
        let markup = todo_html(&todo).into_string();
        assert!(markup.contains("line-through"));
        assert!(markup.contains("Undo"));
    }

    #[test]
    fn test_list_keeps_order() {
        let todos = vec![
            Todo::new(2, "second".to_string()),
            Todo::new(1, "first".to_string()),
        ];
        let markup = todos_html(&todos).into_string();
        let second = markup.find("second");
        let first = markup.find("first");
        assert!(second.is_some() && first.is_some());
        assert!(second < first);
    }

    #[test]
    fn test_page_uses_scheme_palette() {
        let dark = page(&[], ColorScheme::Dark).into_string();
        assert!(dark.contains(ColorScheme::Dark.palette().background));
        assert!(dark.contains("Switch to light theme"));

        let light = body(&[], ColorScheme::Light).into_string();
        assert!(light.contains(ColorScheme::Light.palette().background));
    }
}
