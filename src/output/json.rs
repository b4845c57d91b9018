//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::tree::Node;

use super::config::RenderConfig;
use super::utils::visible_children;

/// Serializable view of a node after depth limiting, size filtering and
/// sorting.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonNode<'a> {
    File {
        name: &'a str,
        size: u64,
    },
    Dir {
        name: &'a str,
        size: u64,
        files: u64,
        dirs: u64,
        children: Vec<JsonNode<'a>>,
    },
}

impl<'a> JsonNode<'a> {
    pub fn from_node(node: &'a Node, config: &RenderConfig) -> Self {
        if !node.is_dir {
            return JsonNode::File {
                name: &node.name,
                size: node.size,
            };
        }

        let children = if config.shows_depth(node.depth + 1) {
            visible_children(node, config)
                .into_iter()
                .map(|child| JsonNode::from_node(child, config))
                .collect()
        } else {
            Vec::new()
        };

        JsonNode::Dir {
            name: &node.name,
            size: node.size,
            files: node.file_count,
            dirs: node.dir_count,
            children,
        }
    }
}

/// Write the displayed view of the tree as pretty-printed JSON.
pub fn write_json<W: Write>(node: &Node, config: &RenderConfig, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &JsonNode::from_node(node, config))?;
    writeln!(out)?;
    Ok(())
}

/// Print the displayed view of the tree as pretty-printed JSON to stdout.
pub fn print_json(node: &Node, config: &RenderConfig) -> Result<()> {
    let stdout = io::stdout();
    write_json(node, config, stdout.lock())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::tree::SortKey;

    fn sample_tree() -> Node {
        let mut sub = Node::directory("sub", 1, 0);
        sub.add_child(Node::file("inner.txt", 2, 0, 40));
        let mut root = Node::directory("root", 0, 0);
        root.add_child(sub);
        root.add_child(Node::file("big.bin", 1, 1, 900));
        root.add_child(Node::file("tiny", 1, 2, 1));
        root
    }

    fn to_value(config: &RenderConfig) -> Value {
        let mut buf = Vec::new();
        write_json(&sample_tree(), config, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_json_structure() {
        let value = to_value(&RenderConfig::default());
        assert_eq!(
            value,
            json!({
                "type": "dir",
                "name": "root",
                "size": 941,
                "files": 3,
                "dirs": 1,
                "children": [
                    { "type": "file", "name": "big.bin", "size": 900 },
                    {
                        "type": "dir",
                        "name": "sub",
                        "size": 40,
                        "files": 1,
                        "dirs": 0,
                        "children": [
                            { "type": "file", "name": "inner.txt", "size": 40 }
                        ]
                    },
                    { "type": "file", "name": "tiny", "size": 1 }
                ]
            })
        );
    }

    #[test]
    fn test_json_applies_filters_but_keeps_totals() {
        let config = RenderConfig {
            max_depth: Some(1),
            min_size: Some(10),
            sort_key: SortKey::Size,
            use_color: true,
        };
        let value = to_value(&config);
        assert_eq!(value["files"], 3);
        assert_eq!(value["size"], 941);
        let names: Vec<&str> = value["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["big.bin", "sub"]);
        assert_eq!(value["children"][1]["children"], json!([]));
    }

    #[test]
    fn test_json_has_no_color_codes() {
        let mut buf = Vec::new();
        let config = RenderConfig {
            use_color: true,
            ..Default::default()
        };
        write_json(&sample_tree(), &config, &mut buf).unwrap();
        assert!(!String::from_utf8(buf).unwrap().contains('\x1b'));
    }
}
