use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PROPERTY_RE: Regex = Regex::new("\"([^\"]*)\"[ \t]+\"([^\"]*)\"").unwrap();
}

/// Entity definitions in map entity-lump text form:
/// brace-delimited blocks of `"key" "value"` pairs
pub struct EntityDefs {
    pub entities: String
}

impl EntityDefs {
    pub fn new(entities: &str) -> EntityDefs {
        EntityDefs {
            entities: entities.to_owned()
        }
    }

    /// Call `f` once per entity block with its key/value properties
    pub fn parse<F>(self: &Self, mut f: F) where F: FnMut(HashMap<&str, &str>) {
        // find ranges of data between { and }, ignoring braces inside quoted values
        let mut slices = Vec::new();
        let mut start = None;
        let mut in_quotes = false;
        for (idx, v) in self.entities.as_bytes().iter().enumerate() {
            if *v == b'"' {
                in_quotes = !in_quotes;
            }
            else if in_quotes {
                continue;
            }
            else if *v == b'{' {
                start = Some(idx + 1);
            }
            else if *v == b'}' {
                if let Some(s) = start.take() {
                    slices.push((s, idx));
                }
            }
        }

        // parse key value pairs
        for (start, end) in slices {
            let entitydata = &self.entities[start..end];

            let mut map = HashMap::new();
            for (_, [propname, propval]) in PROPERTY_RE.captures_iter(entitydata).map(|c| c.extract()) {
                map.insert(propname, propval);
            }

            f(map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blocks() {
        let defs = EntityDefs::new(r#"
{
"classname" "misc_jumpgate"
"origin" "0 0 64"
}
{
"classname" "info_player_start"
}
"#);

        let mut found = Vec::new();
        defs.parse(|props| {
            found.push((props["classname"].to_owned(), props.get("origin").map(|s| s.to_string())));
        });

        assert_eq!(found.len(), 2);
        assert_eq!(found[0], ("misc_jumpgate".to_owned(), Some("0 0 64".to_owned())));
        assert_eq!(found[1], ("info_player_start".to_owned(), None));
    }

    #[test]
    fn braces_inside_values() {
        let defs = EntityDefs::new(r#"{ "message" "{x}" "classname" "misc_jumpgate" }"#);
        let mut found = Vec::new();
        defs.parse(|props| found.push((props.get("message").map(|s| s.to_string()), props.get("classname").map(|s| s.to_string()))));

        assert_eq!(found, vec![(Some("{x}".to_owned()), Some("misc_jumpgate".to_owned()))]);
    }

    #[test]
    fn empty_block_and_stray_brace() {
        let defs = EntityDefs::new("} {} { \"a\" \"b\" }");
        let mut counts = Vec::new();
        defs.parse(|props| counts.push(props.len()));
        assert_eq!(counts, vec![0, 1]);
    }
}
