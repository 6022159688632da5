use super::{ExtractError, ExtractionRecord, ExtractionSession};
use crate::core::ast::SyntaxNode;
use crate::core::registry::FunctionRegistry;
use crate::core::visit::{FaultPolicy, NodeTraverser, NodeVisitor};

/// Visitor collecting gettext-style translation calls.
///
/// The extractor is inert until [`enable`](Self::enable) is called, so it can
/// stay registered during ordinary compilation and only record during a
/// dedicated extraction pass. Toggling it either way starts a new session,
/// dropping whatever was collected before.
#[derive(Debug, Default)]
pub struct MessageExtractor {
    enabled: bool,
    session: ExtractionSession,
}

impl MessageExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
        self.new_session();
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.new_session();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records collected since the last toggle, in traversal order.
    pub fn messages(&self) -> &[ExtractionRecord] {
        self.session.records()
    }

    /// Replace the current session with an empty one and return the old one.
    pub fn new_session(&mut self) -> ExtractionSession {
        std::mem::take(&mut self.session)
    }
}

impl NodeVisitor for MessageExtractor {
    fn enter_node(
        &mut self,
        node: &SyntaxNode,
        registry: &dyn FunctionRegistry,
    ) -> Result<(), ExtractError> {
        if !self.enabled {
            return Ok(());
        }
        self.session.record_call(node, registry)?;
        Ok(())
    }

    fn priority(&self) -> i32 {
        0
    }
}

/// Collect every translation message in `root`.
///
/// The first malformed translation call aborts the pass.
pub fn extract_messages(
    root: &SyntaxNode,
    registry: &dyn FunctionRegistry,
) -> Result<Vec<ExtractionRecord>, ExtractError> {
    let mut extractor = MessageExtractor::new();
    extractor.enable();

    let mut traverser = NodeTraverser::new(FaultPolicy::Abort);
    traverser.add_visitor(&mut extractor);
    traverser.traverse(root, registry)?;
    drop(traverser);

    Ok(extractor.new_session().into_records())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::registry::FunctionTable;

    fn walk(extractor: &mut MessageExtractor, root: &SyntaxNode) {
        let registry = FunctionTable::translation_functions();
        let mut traverser = NodeTraverser::default();
        traverser.add_visitor(extractor);
        traverser.traverse(root, &registry).unwrap();
    }

    fn template_without_calls() -> SyntaxNode {
        SyntaxNode::other(
            "module",
            vec![
                SyntaxNode::other("text", vec![], 1),
                SyntaxNode::call("upper", vec![SyntaxNode::string("shout", 2)], 2),
            ],
            1,
        )
    }

    /// `_n` on line 5 wrapping `__` on line 9.
    fn nested_template() -> SyntaxNode {
        SyntaxNode::other(
            "module",
            vec![SyntaxNode::call(
                "_n",
                vec![
                    SyntaxNode::string("One file", 5),
                    SyntaxNode::string("%d files", 5),
                    SyntaxNode::call("__", vec![SyntaxNode::string("count", 9)], 9),
                ],
                5,
            )],
            1,
        )
    }

    #[test]
    fn test_defaults_to_disabled_and_empty() {
        let extractor = MessageExtractor::new();
        assert!(!extractor.is_enabled());
        assert!(extractor.messages().is_empty());
        assert_eq!(extractor.priority(), 0);
    }

    #[test]
    fn test_single_call() {
        let root = SyntaxNode::other(
            "module",
            vec![SyntaxNode::call("_", vec![SyntaxNode::string("Hello", 3)], 3)],
            1,
        );
        let mut extractor = MessageExtractor::new();
        extractor.enable();

        walk(&mut extractor, &root);

        assert_eq!(
            extractor.messages(),
            &[ExtractionRecord {
                text: "Hello".to_string(),
                plural_text: None,
                domain: "messages".to_string(),
                notes: None,
                context: None,
                line: 3,
            }]
        );
    }

    #[test]
    fn test_no_matching_calls_yields_nothing() {
        let mut extractor = MessageExtractor::new();
        extractor.enable();

        walk(&mut extractor, &template_without_calls());

        assert!(extractor.messages().is_empty());
    }

    #[test]
    fn test_legacy_transchoice_is_not_collected() {
        let root = SyntaxNode::call(
            "transchoice",
            vec![SyntaxNode::string("{0} none|{1} one", 4)],
            4,
        );
        let mut extractor = MessageExtractor::new();
        extractor.enable();

        walk(&mut extractor, &root);

        assert!(extractor.messages().is_empty());
    }

    #[test]
    fn test_nested_calls_in_traversal_order() {
        let mut extractor = MessageExtractor::new();
        extractor.enable();

        walk(&mut extractor, &nested_template());

        let collected: Vec<(&str, usize)> = extractor
            .messages()
            .iter()
            .map(|r| (r.text.as_str(), r.line))
            .collect();
        assert_eq!(collected, vec![("One file", 5), ("count", 9)]);
        assert!(extractor.messages().iter().all(|r| r.domain == "messages"));
    }

    #[test]
    fn test_disabled_extractor_records_nothing() {
        let mut extractor = MessageExtractor::new();
        extractor.enable();
        extractor.disable();

        walk(&mut extractor, &nested_template());

        assert!(extractor.messages().is_empty());
    }

    #[test]
    fn test_toggling_clears_previous_records() {
        let mut extractor = MessageExtractor::new();
        extractor.enable();
        walk(&mut extractor, &nested_template());
        assert_eq!(extractor.messages().len(), 2);

        extractor.disable();
        assert!(extractor.messages().is_empty());

        extractor.enable();
        let root = SyntaxNode::call("__n", vec![SyntaxNode::string("apple", 12)], 12);
        walk(&mut extractor, &root);

        assert_eq!(extractor.messages(), &[ExtractionRecord::message("apple", 12)]);
    }

    #[test]
    fn test_repeated_passes_are_identical() {
        let mut extractor = MessageExtractor::new();

        extractor.enable();
        walk(&mut extractor, &nested_template());
        let first = extractor.messages().to_vec();

        extractor.enable();
        walk(&mut extractor, &nested_template());

        assert_eq!(extractor.messages(), first.as_slice());
    }

    #[test]
    fn test_new_session_hands_over_records() {
        let mut extractor = MessageExtractor::new();
        extractor.enable();
        walk(&mut extractor, &nested_template());

        let session = extractor.new_session();

        assert_eq!(session.len(), 2);
        assert!(extractor.messages().is_empty());
        assert!(extractor.is_enabled());
    }

    #[test]
    fn test_leave_node_has_no_effect() {
        let registry = FunctionTable::translation_functions();
        let node = SyntaxNode::call("_", vec![SyntaxNode::string("Hello", 1)], 1);
        let mut extractor = MessageExtractor::new();
        extractor.enable();

        assert_eq!(extractor.leave_node(&node, &registry), Ok(()));
        assert!(extractor.messages().is_empty());
    }

    #[test]
    fn test_skip_keeps_collecting_after_malformed_call() {
        let registry = FunctionTable::translation_functions();
        let root = SyntaxNode::other(
            "module",
            vec![
                SyntaxNode::call("_", vec![], 2),
                SyntaxNode::call("_", vec![SyntaxNode::string("Bye", 6)], 6),
            ],
            1,
        );
        let mut extractor = MessageExtractor::new();
        extractor.enable();

        let mut traverser = NodeTraverser::new(FaultPolicy::Skip);
        traverser.add_visitor(&mut extractor);
        let report = traverser.traverse(&root, &registry).unwrap();
        drop(traverser);

        assert_eq!(
            report.faults,
            vec![ExtractError::MissingArgument {
                function: "_".to_string(),
                line: 2
            }]
        );
        assert_eq!(extractor.messages(), &[ExtractionRecord::message("Bye", 6)]);
    }

    #[test]
    fn test_extract_messages_aborts_on_malformed_call() {
        let registry = FunctionTable::translation_functions();
        let root = SyntaxNode::call("_", vec![SyntaxNode::other("name", vec![], 7)], 7);

        let err = extract_messages(&root, &registry).unwrap_err();

        assert_eq!(err.function(), "_");
        assert_eq!(err.line(), 7);
    }

    #[test]
    fn test_extract_messages() {
        let registry = FunctionTable::translation_functions();

        let records = extract_messages(&nested_template(), &registry).unwrap();

        assert_eq!(
            records,
            vec![
                ExtractionRecord::message("One file", 5),
                ExtractionRecord::message("count", 9),
            ]
        );
    }
}
