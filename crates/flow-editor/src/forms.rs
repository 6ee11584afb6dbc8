//! # Property Forms
//!
//! Headless property panel: [`fields_for`] describes the form for a node's
//! type, [`apply`] writes an edit straight back into the node. There is no
//! "apply" button in the UI: every keystroke goes through here and the
//! return value tells the host whether the node's header/preview changed.

use crate::model::{Branch, FlowNode, NodeBody, PipelineStage};

/// A widget descriptor in a property form, keyed by a stable field key.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Text {
        key: &'static str,
        label: &'static str,
        value: String,
    },
    TextArea {
        key: &'static str,
        label: &'static str,
        value: String,
    },
    Number {
        key: &'static str,
        label: &'static str,
        value: u32,
    },
    Select {
        key: &'static str,
        label: &'static str,
        value: &'static str,
        options: Vec<SelectOption>,
    },
    /// Repeatable branch editor of a condition node.
    BranchList {
        key: &'static str,
        branches: Vec<Branch>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub display: &'static str,
}

/// An edit coming back from the form.
#[derive(Clone, Debug)]
pub enum FieldEdit {
    Text(String),
    Number(u32),
    AddBranch,
    RemoveBranch(usize),
    EditBranch { index: usize, value: String },
}

/// Builds the form for the given node. Every type gets the `label` field
/// first; the rest is type-specific.
pub fn fields_for(node: &FlowNode) -> Vec<Field> {
    let mut fields = vec![Field::Text {
        key: "label",
        label: "Nome do bloco",
        value: node.body.label().to_string(),
    }];

    match &node.body {
        NodeBody::Trigger { keyword, .. } => {
            // Keyword trigger only; the "new contact" subtype has no extra
            // field.
            if node.subtype.as_deref() != Some("new_contact") {
                fields.push(Field::Text {
                    key: "keyword",
                    label: "Palavras-chave (separadas por vírgula)",
                    value: keyword.clone(),
                });
            }
        }
        NodeBody::Message { content, .. } => fields.push(Field::TextArea {
            key: "content",
            label: "Mensagem",
            value: content.clone(),
        }),
        NodeBody::Wait { timeout, .. } => fields.push(Field::Number {
            key: "timeout",
            label: "Tempo limite (segundos)",
            value: *timeout,
        }),
        NodeBody::Condition { conditions, .. } => fields.push(Field::BranchList {
            key: "conditions",
            branches: conditions.clone(),
        }),
        NodeBody::Delay { seconds, .. } => fields.push(Field::Number {
            key: "seconds",
            label: "Aguardar (segundos)",
            value: *seconds,
        }),
        NodeBody::Transfer { message, .. } => fields.push(Field::TextArea {
            key: "message",
            label: "Mensagem de transferência",
            value: message.clone(),
        }),
        NodeBody::Tag { tag, .. } => fields.push(Field::Text {
            key: "tag",
            label: "Tag",
            value: tag.clone(),
        }),
        NodeBody::Status { status, .. } => fields.push(Field::Select {
            key: "status",
            label: "Status do lead",
            value: status.as_str(),
            options: PipelineStage::ALL
                .into_iter()
                .map(|s| SelectOption {
                    value: s.as_str(),
                    display: s.display(),
                })
                .collect(),
        }),
        NodeBody::Webhook { url, .. } => fields.push(Field::Text {
            key: "url",
            label: "URL",
            value: url.clone(),
        }),
        NodeBody::End { .. } => {}
    }

    fields
}

/// Writes an edit into the node. Returns whether the node's visual block
/// (header/preview) needs a refresh. Unknown keys and type-mismatched edits
/// are ignored.
pub fn apply(node: &mut FlowNode, key: &str, edit: FieldEdit) -> bool {
    if key == "label" {
        if let FieldEdit::Text(value) = edit {
            node.body.set_label(value);
            return true;
        }
        return false;
    }

    match (&mut node.body, key, edit) {
        (NodeBody::Trigger { keyword, .. }, "keyword", FieldEdit::Text(v)) => {
            *keyword = v;
            true
        }
        (NodeBody::Message { content, .. }, "content", FieldEdit::Text(v)) => {
            *content = v;
            true
        }
        (NodeBody::Wait { timeout, .. }, "timeout", FieldEdit::Number(v)) => {
            *timeout = v;
            true
        }
        (NodeBody::Condition { conditions, .. }, "conditions", edit) => match edit {
            FieldEdit::AddBranch => {
                conditions.push(Branch::default());
                true
            }
            FieldEdit::RemoveBranch(index) => {
                if index < conditions.len() {
                    conditions.remove(index);
                    true
                } else {
                    false
                }
            }
            FieldEdit::EditBranch { index, value } => {
                if let Some(branch) = conditions.get_mut(index) {
                    branch.value = value;
                    true
                } else {
                    false
                }
            }
            _ => false,
        },
        (NodeBody::Delay { seconds, .. }, "seconds", FieldEdit::Number(v)) => {
            *seconds = v;
            true
        }
        (NodeBody::Transfer { message, .. }, "message", FieldEdit::Text(v)) => {
            *message = v;
            true
        }
        (NodeBody::Tag { tag, .. }, "tag", FieldEdit::Text(v)) => {
            *tag = v;
            true
        }
        (NodeBody::Status { status, .. }, "status", FieldEdit::Text(v)) => {
            match PipelineStage::parse(&v) {
                Some(stage) => {
                    *status = stage;
                    true
                }
                None => false,
            }
        }
        (NodeBody::Webhook { url, .. }, "url", FieldEdit::Text(v)) => {
            *url = v;
            true
        }
        _ => false,
    }
}

/// Inserts a `{{name}}` placeholder token into `content` at the caret
/// (a character offset, clamped to the text length).
pub fn insert_variable(content: &str, caret: usize, name: &str) -> String {
    let byte = content
        .char_indices()
        .nth(caret)
        .map(|(i, _)| i)
        .unwrap_or(content.len());
    let mut out = String::with_capacity(content.len() + name.len() + 4);
    out.push_str(&content[..byte]);
    out.push_str("{{");
    out.push_str(name);
    out.push_str("}}");
    out.push_str(&content[byte..]);
    out
}
