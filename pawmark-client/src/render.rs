//! HTML rendering of the favorites list. Pure string-producing functions so
//! the host page can swap the container's markup wholesale after each reload.
//! Every interpolated string is escaped before insertion.

use pawmark_core::Favorite;

/// Escape text for interpolation into HTML markup or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether a favorite's value should render as an image: an http(s) URL with
/// a known image extension or a dog.ceo host.
pub fn looks_like_image(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://"))
        && (value.contains(".jpg")
            || value.contains(".jpeg")
            || value.contains(".png")
            || value.contains("dog.ceo"))
}

/// Render the full favorites container: a placeholder when empty, otherwise
/// one card per favorite with its type badge, remove control, and value.
pub fn render_favorites(favorites: &[Favorite]) -> String {
    if favorites.is_empty() {
        return r#"<div class="small">No favorites saved yet.</div>"#.to_string();
    }

    favorites.iter().map(render_card).collect()
}

fn render_card(favorite: &Favorite) -> String {
    let kind = if favorite.kind.is_empty() {
        "item".to_string()
    } else {
        escape_html(&favorite.kind)
    };
    let id = escape_html(&favorite.id.to_string());

    let content = if looks_like_image(&favorite.value) {
        format!(
            r#"<img class="media" src="{}" alt="{}">"#,
            escape_html(&favorite.value),
            kind
        )
    } else {
        format!(
            r#"<div class="small">{}</div>"#,
            escape_html(&favorite.value)
        )
    };

    format!(
        concat!(
            r#"<div class="card">"#,
            r#"<div class="row">"#,
            r#"<div class="badge">{kind}</div>"#,
            r#"<button class="btn" data-remove-id="{id}">Remove</button>"#,
            r#"</div>"#,
            "{content}",
            r#"</div>"#
        ),
        kind = kind,
        id = id,
        content = content
    )
}
