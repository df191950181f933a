use serde_json::Value;

/// Named templates the panels render through. The template language itself
/// lives outside this crate; a renderer is a pure function from a name and a
/// JSON payload to markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    CommentList,
    MusicList,
    MusicCategoryList,
}

pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: Template, data: &Value) -> String;
}

/// Plain-text renderer used by the terminal panels, one row per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTemplates;

impl TextTemplates {
    fn comment_row(row: &Value) -> String {
        let nickname = row["userNickname"].as_str().unwrap_or("anonymous");
        let contents = row["commentContents"].as_str().unwrap_or("");
        let mut line = format!("{nickname}  {contents}");
        if row["isSecret"].as_bool().unwrap_or(false) {
            line.push_str("  [secret]");
        }
        if row["commentThumbnailImage"].as_str().is_some() {
            line.push_str("  [img]");
        }
        line
    }

    fn music_row(row: &Value) -> String {
        format!(
            "{} - {}",
            row["title"].as_str().unwrap_or("Unknown Title"),
            row["artist"].as_str().unwrap_or("Unknown Artist"),
        )
    }

    fn category_row(row: &Value) -> String {
        row["categoryName"].as_str().unwrap_or("?").to_string()
    }
}

impl TemplateRenderer for TextTemplates {
    fn render(&self, template: Template, data: &Value) -> String {
        let rows = data.as_array().map(Vec::as_slice).unwrap_or_default();
        let line = match template {
            Template::CommentList => Self::comment_row,
            Template::MusicList => Self::music_row,
            Template::MusicCategoryList => Self::category_row,
        };
        rows.iter().map(line).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comment_rows_render_one_line_each() {
        let data = json!([
            { "userNickname": "john", "commentContents": "hi", "isSecret": true },
            { "userNickname": "jane", "commentContents": "hello",
              "commentThumbnailImage": "https://cdn/i.png" }
        ]);

        let markup = TextTemplates.render(Template::CommentList, &data);
        let lines: Vec<&str> = markup.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[secret]"));
        assert!(lines[1].contains("[img]"));
    }

    #[test]
    fn music_rows_join_title_and_artist() {
        let data = json!([{ "title": "So What", "artist": "Miles Davis" }]);
        assert_eq!(
            TextTemplates.render(Template::MusicList, &data),
            "So What - Miles Davis"
        );
    }

    #[test]
    fn non_array_payload_renders_empty() {
        assert_eq!(
            TextTemplates.render(Template::MusicList, &json!({"oops": 1})),
            ""
        );
    }
}
