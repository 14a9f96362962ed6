use itertools::Itertools;
use svgsheet::entities::LayoutEntry;
use svgsheet::io::import::sanitize_identifier;

/// Renders the stylesheet of a sheet: a shared block for every class of the sheet, followed by one rule per icon
/// positioning the sheet's image on the icon.
pub fn render_css(sheet_name: &str, svg_file: &str, layout: &[LayoutEntry]) -> String {
    let prefix = sanitize_identifier(sheet_name);
    let mut css = format!("[class^=\"{prefix}-\"], [class*=\" {prefix}-\"] {{ display: inline-block; }}\n");
    for entry in layout {
        css.push_str(&format!(
            ".{prefix}-{} {{ background: url(\"{svg_file}\") {}px {}px no-repeat; width: {}px; height: {}px; }}\n",
            entry.identifier,
            entry.offset.dx,
            entry.offset.dy,
            entry.width(),
            entry.height(),
        ));
    }
    css
}

/// Renders a preview page showing every icon of the sheet next to its class name.
pub fn render_html(sheet_name: &str, css_file: &str, layout: &[LayoutEntry]) -> String {
    let prefix = sanitize_identifier(sheet_name);
    let items = layout
        .iter()
        .map(|entry| {
            let class = format!("{prefix}-{}", entry.identifier);
            format!("      <li><span class=\"{class}\"></span> <code>{class}</code></li>")
        })
        .join("\n");
    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>{sheet_name}</title>\n    <link rel=\"stylesheet\" href=\"{css_file}\">\n  </head>\n  <body>\n    <ul>\n{items}\n    </ul>\n  </body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgsheet::entities::IconSize;
    use svgsheet::geometry::Offset;

    fn entry(identifier: &str, x: f32, y: f32, width: f32, height: f32) -> LayoutEntry {
        LayoutEntry {
            identifier: identifier.to_string(),
            offset: -Offset::new(x, y),
            size: IconSize::new(width, height),
        }
    }

    #[test]
    fn css_rule_per_icon() {
        let layout = vec![entry("home", 10.0, 10.0, 24.0, 24.0), entry("star", 44.0, 10.0, 16.0, 16.0)];
        let css = render_css("icons", "icons.svg", &layout);

        let lines = css.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[class^=\"icons-\"]"));
        assert_eq!(
            lines[1],
            ".icons-home { background: url(\"icons.svg\") -10px -10px no-repeat; width: 24px; height: 24px; }"
        );
        assert_eq!(
            lines[2],
            ".icons-star { background: url(\"icons.svg\") -44px -10px no-repeat; width: 16px; height: 16px; }"
        );
    }

    #[test]
    fn html_lists_every_icon() {
        let layout = vec![entry("home", 10.0, 10.0, 24.0, 24.0), entry("star", 44.0, 10.0, 16.0, 16.0)];
        let html = render_html("icons", "icons.css", &layout);

        assert!(html.contains("<link rel=\"stylesheet\" href=\"icons.css\">"));
        assert!(html.contains("<span class=\"icons-home\"></span>"));
        assert!(html.contains("<span class=\"icons-star\"></span>"));
        assert!(html.find("icons-home") < html.find("icons-star"));
    }
}
