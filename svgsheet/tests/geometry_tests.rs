#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use svgsheet::diagnostics::{Diagnostic, Diagnostics};
    use svgsheet::entities::{IconNode, PathData, XmlElement};
    use svgsheet::geometry::geo_traits::Translatable;
    use svgsheet::geometry::{Offset, PathCommand, parse_path_data, serialize_path_data, translate_node};

    fn path_node(d: &str) -> IconNode {
        IconNode::from(svgsheet::entities::XmlNode::Element(
            XmlElement::new("path").with_attribute("d", d),
        ))
    }

    fn commands_of(node: &IconNode) -> &[PathCommand] {
        match node {
            IconNode::Path {
                data: PathData::Parsed(commands),
                ..
            } => commands,
            _ => panic!("expected a parsed path, got {node:?}"),
        }
    }

    #[test_case("M10 20 L30 40 Z"; "lines")]
    #[test_case("M0 0 C1 2 3 4 5 6 S7 8 9 10"; "cubic curves")]
    #[test_case("M0 0 Q1 2 3 4 T5 6"; "quadratic curves")]
    #[test_case("M0 0 H10 V20 H0 Z"; "horizontal and vertical")]
    #[test_case("M0 0 A5 5 30 1 0 10 10"; "arc")]
    #[test_case("M1.5 2.5 l3 4 c1 1 2 2 3 3 z"; "mixed relative")]
    fn translation_round_trips(d: &str) {
        let original = parse_path_data(d).unwrap();
        let offset = Offset::new(40.0, 125.0);

        let round_trip = original
            .iter()
            .map(|cmd| cmd.translate_clone(offset).translate_clone(-offset))
            .collect::<Vec<_>>();

        assert_eq!(round_trip, original);
    }

    #[test_case("m5 5 l1 2"; "relative line")]
    #[test_case("M0 0 c1 2 3 4 5 6 s1 1 2 2"; "relative curves")]
    #[test_case("M0 0 a5 5 0 0 1 10 10"; "relative arc")]
    #[test_case("M0 0 h10 v10 q1 1 2 2 t3 3 z"; "relative short forms")]
    fn relative_commands_are_invariant(d: &str) {
        let original = parse_path_data(d).unwrap();
        let translated = original
            .iter()
            .map(|cmd| cmd.translate_clone(Offset::new(7.0, -3.0)))
            .collect::<Vec<_>>();

        assert!(original.iter().any(|cmd| cmd.relative));
        for (before, after) in original.iter().zip(translated.iter()) {
            if before.relative {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn absolute_path_is_shifted() {
        let mut diagnostics = Diagnostics::new();
        let node = path_node("M10 20 C1 2 3 4 5 6 L30 40 Z");

        let translated = translate_node(&node, Offset::new(100.0, 10.0), "icon.svg", &mut diagnostics);

        assert_eq!(
            serialize_path_data(commands_of(&translated)),
            "M110 30 C101 12 103 14 105 16 L130 50 Z"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn arc_radii_and_rotation_are_not_shifted() {
        let mut diagnostics = Diagnostics::new();
        let node = path_node("M0 0 A5 6 30 1 0 10 10");

        let translated = translate_node(&node, Offset::new(10.0, 20.0), "icon.svg", &mut diagnostics);

        assert_eq!(
            serialize_path_data(commands_of(&translated)),
            "M10 20 A5 6 30 1 0 20 30"
        );
    }

    #[test]
    fn horizontal_and_vertical_lines_shift_their_own_axis() {
        let mut diagnostics = Diagnostics::new();
        let node = path_node("M0 0 H10 V20");

        let translated = translate_node(&node, Offset::new(1.0, 2.0), "icon.svg", &mut diagnostics);

        assert_eq!(serialize_path_data(commands_of(&translated)), "M1 2 H11 V22");
    }

    #[test]
    fn original_node_is_left_untouched() {
        let mut diagnostics = Diagnostics::new();
        let node = path_node("M1 1");
        let before = node.clone();

        let _ = translate_node(&node, Offset::new(5.0, 5.0), "icon.svg", &mut diagnostics);

        assert_eq!(node, before);
    }

    #[test]
    fn circle_and_rect_are_shifted() {
        let mut diagnostics = Diagnostics::new();
        let circle = IconNode::Circle(
            XmlElement::new("circle")
                .with_attribute("cx", "12")
                .with_attribute("cy", "7.5")
                .with_attribute("r", "4"),
        );
        let rect = IconNode::Rect(XmlElement::new("rect").with_attribute("x", "3").with_attribute("width", "8"));
        let offset = Offset::new(10.0, 20.0);

        let IconNode::Circle(circle) = translate_node(&circle, offset, "icon.svg", &mut diagnostics) else {
            panic!("circle changed kind");
        };
        let IconNode::Rect(rect) = translate_node(&rect, offset, "icon.svg", &mut diagnostics) else {
            panic!("rect changed kind");
        };

        assert_eq!(circle.attribute("cx"), Some("22"));
        assert_eq!(circle.attribute("cy"), Some("27.5"));
        assert_eq!(circle.attribute("r"), Some("4"));
        assert_eq!(rect.attribute("x"), Some("13"));
        // absent coordinates default to 0
        assert_eq!(rect.attribute("y"), Some("20"));
        assert_eq!(rect.attribute("width"), Some("8"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn groups_are_translated_recursively() {
        let mut diagnostics = Diagnostics::new();
        let group = IconNode::Group {
            attributes: Default::default(),
            children: vec![
                path_node("M0 0 L1 1"),
                IconNode::Group {
                    attributes: Default::default(),
                    children: vec![IconNode::Circle(
                        XmlElement::new("circle").with_attribute("cx", "1").with_attribute("cy", "1"),
                    )],
                },
            ],
        };

        let IconNode::Group { children, .. } =
            translate_node(&group, Offset::new(2.0, 3.0), "icon.svg", &mut diagnostics)
        else {
            panic!("group changed kind");
        };

        assert_eq!(serialize_path_data(commands_of(&children[0])), "M2 3 L3 4");
        let IconNode::Group { children: inner, .. } = &children[1] else {
            panic!("inner group changed kind");
        };
        let IconNode::Circle(circle) = &inner[0] else {
            panic!("circle changed kind");
        };
        assert_eq!(circle.attribute("cx"), Some("3"));
        assert_eq!(circle.attribute("cy"), Some("4"));
    }

    #[test]
    fn unsupported_elements_are_copied_and_reported() {
        let mut diagnostics = Diagnostics::new();
        let text = IconNode::Other(
            XmlElement::new("text")
                .with_attribute("x", "5")
                .with_attribute("y", "5"),
        );

        let translated = translate_node(&text, Offset::new(10.0, 10.0), "icon.svg", &mut diagnostics);

        assert_eq!(translated, text);
        assert_eq!(
            diagnostics.iter().collect::<Vec<_>>(),
            vec![&Diagnostic::UnsupportedElement {
                source: "icon.svg".to_string(),
                kind: "text".to_string(),
            }]
        );
    }

    #[test]
    fn malformed_coordinates_are_left_untouched() {
        let mut diagnostics = Diagnostics::new();
        let rect = IconNode::Rect(XmlElement::new("rect").with_attribute("x", "left").with_attribute("y", "1"));

        let IconNode::Rect(rect) = translate_node(&rect, Offset::new(10.0, 10.0), "icon.svg", &mut diagnostics)
        else {
            panic!("rect changed kind");
        };

        assert_eq!(rect.attribute("x"), Some("left"));
        assert_eq!(rect.attribute("y"), Some("11"));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn fractional_offsets_are_added() {
        let commands = parse_path_data("M0.25 0.5").unwrap();
        let shifted = commands[0].translate_clone(Offset::new(0.5, 0.25));

        assert!(approx_eq!(f32, shifted.x.unwrap(), 0.75, ulps = 2));
        assert!(approx_eq!(f32, shifted.y.unwrap(), 0.75, ulps = 2));
    }
}
