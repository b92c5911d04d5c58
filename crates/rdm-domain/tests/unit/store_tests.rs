//! Unit tests for the symbol store arena

use rdm_domain::{CommentLocation, FullName, ModuleKind, ParseContext, SymbolStore};

#[test]
fn test_declare_creates_nested_names() {
    let mut store = SymbolStore::new();
    let net = store.declare(None, "Net", ModuleKind::Module);
    let http = store.declare(Some(net), "HTTP", ModuleKind::Class);

    assert_eq!(store.len(), 2);
    assert_eq!(store[http].full_name.as_str(), "Net::HTTP");
    assert_eq!(store[net].children, vec![http]);
    assert_eq!(store.find(&FullName::new("Net::HTTP")), Some(http));
}

#[test]
fn test_reopened_declaration_is_same_entity() {
    let mut store = SymbolStore::new();
    let first = store.declare(None, "Set", ModuleKind::Class);
    store.add_comment(first, CommentLocation::new("First."));
    let second = store.declare(None, "Set", ModuleKind::Class);
    store.add_comment(second, CommentLocation::new("Second."));

    assert_eq!(first, second);
    assert_eq!(store.len(), 1);
    assert_eq!(store[first].comment_locations.len(), 2);
}

#[test]
fn test_implicit_namespace_takes_first_explicit_kind() {
    let mut store = SymbolStore::new();
    let outer = store.ensure_namespace(None, "Outer");
    assert_eq!(store[outer].kind, ModuleKind::Module);

    let again = store.declare(None, "Outer", ModuleKind::Class);
    assert_eq!(again, outer);
    assert_eq!(store[outer].kind, ModuleKind::Class);
}

#[test]
fn test_documented_kind_is_not_overwritten() {
    let mut store = SymbolStore::new();
    let id = store.declare(None, "Thing", ModuleKind::Module);
    store.add_comment(id, CommentLocation::new(""));
    store.declare(None, "Thing", ModuleKind::Class);
    assert_eq!(store[id].kind, ModuleKind::Module);
}

#[test]
fn test_children_are_classes_then_modules() {
    let mut store = SymbolStore::new();
    let root = store.declare(None, "Root", ModuleKind::Module);
    let helpers = store.declare(Some(root), "Helpers", ModuleKind::Module);
    let widget = store.declare(Some(root), "Widget", ModuleKind::Class);
    let gadget = store.declare(Some(root), "Gadget", ModuleKind::Class);

    assert_eq!(store[root].children, vec![helpers, widget, gadget]);
    assert_eq!(store.children(root), vec![widget, gadget, helpers]);
}

#[test]
fn test_parse_context_records_each_module_once() {
    let mut store = SymbolStore::new();
    let id = store.declare(None, "Widget", ModuleKind::Class);
    let mut context = ParseContext::new("lib/widget.rb");
    context.add_module(id);
    context.add_module(id);
    assert_eq!(context.modules, vec![id]);
}
