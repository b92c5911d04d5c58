//! Tests for parse context flattening

use rdm_application::ModuleCollector;
use rdm_domain::{ModuleKind, ParseContext, SymbolStore};

#[test]
fn test_pre_order_with_classes_before_modules() {
    let mut store = SymbolStore::new();
    let outer = store.declare(None, "Outer", ModuleKind::Class);
    let mixin = store.declare(Some(outer), "Mixin", ModuleKind::Module);
    let inner = store.declare(Some(outer), "Inner", ModuleKind::Class);
    let deep = store.declare(Some(inner), "Deep", ModuleKind::Class);
    let other = store.declare(None, "Other", ModuleKind::Module);

    let mut context = ParseContext::new("lib/outer.rb");
    context.add_module(outer);
    context.add_module(other);

    let ids = ModuleCollector::new(&store).collect_ids(&context);
    assert_eq!(ids, vec![outer, inner, deep, mixin, other]);
}

#[test]
fn test_collected_modules_carry_their_source() {
    let mut store = SymbolStore::new();
    let set = store.declare(None, "Set", ModuleKind::Class);
    let mut first = ParseContext::new("lib/set.rb");
    first.add_module(set);
    let mut second = ParseContext::new("lib/set/sorted_set.rb");
    second.add_module(set);
    let contexts = vec![first, second];

    let collected = ModuleCollector::new(&store).collect_all(&contexts);
    let sources: Vec<_> = collected.iter().map(|c| c.source.to_path_buf()).collect();
    assert_eq!(collected.len(), 2);
    assert_eq!(sources[0], contexts[0].source);
    assert_eq!(sources[1], contexts[1].source);
    assert!(collected.iter().all(|c| c.module.full_name.as_str() == "Set"));
}

#[test]
fn test_empty_context() {
    let store = SymbolStore::new();
    let context = ParseContext::new("lib/empty.rb");
    assert!(ModuleCollector::new(&store).collect(&context).is_empty());
}
