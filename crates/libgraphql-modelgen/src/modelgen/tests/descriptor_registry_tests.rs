use crate::modelgen::ClassDescriptor;
use crate::modelgen::Descriptor;
use crate::modelgen::DescriptorRegistry;
use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::ModelPath;
use crate::modelgen::ResultParserDescriptor;
use crate::modelgen::ResultParserSource;
use crate::operation::OperationKind;
use indexmap::IndexMap;
use std::sync::Arc;

fn iface(name: &str, implements: Vec<Arc<InterfaceDescriptor>>) -> Arc<InterfaceDescriptor> {
    Arc::new(InterfaceDescriptor {
        fields: vec![],
        graphql_type: "Node".to_string(),
        implements,
        name: name.to_string(),
    })
}

fn class(name: &str, implements: Vec<Arc<InterfaceDescriptor>>) -> Arc<ClassDescriptor> {
    Arc::new(ClassDescriptor {
        graphql_type: name.to_string(),
        implements,
        name: name.to_string(),
    })
}

fn parser(
    return_type: Arc<InterfaceDescriptor>,
    classes: Vec<Arc<ClassDescriptor>>,
) -> Descriptor {
    let discriminators: IndexMap<String, String> = classes
        .iter()
        .map(|class| (class.graphql_type().to_string(), class.name().to_string()))
        .collect();
    Descriptor::ResultParser(Arc::new(ResultParserDescriptor {
        classes,
        discriminators,
        name: "HeroResultParser".to_string(),
        path: ModelPath::root("GetHero").child("hero"),
        return_type,
        source: ResultParserSource::Operation {
            kind: OperationKind::Query,
            name: "GetHero".to_string(),
        },
    }))
}

#[test]
fn registration_walks_references_breadth_first() {
    let i_frag = iface("IFrag", vec![]);
    let i_hero = iface("IHero", vec![i_frag.clone()]);
    let i_droid = iface("IDroid", vec![]);
    let droid = class("Droid", vec![i_hero.clone(), i_droid.clone()]);
    let human = class("Human", vec![i_hero.clone()]);

    let mut registry = DescriptorRegistry::new();
    registry.register(parser(i_hero, vec![droid, human]));

    let graph = registry.into_model_graph();
    let names: Vec<&str> = graph.descriptors().keys().map(String::as_str).collect();
    assert_eq!(names, vec![
        "HeroResultParser",
        "IHero",
        "Droid",
        "Human",
        "IFrag",
        "IDroid",
    ]);
}

#[test]
fn registered_names_are_never_replaced() {
    let original = iface("IHero", vec![]);
    let impostor = Arc::new(InterfaceDescriptor {
        fields: vec![],
        graphql_type: "Droid".to_string(),
        implements: vec![],
        name: "IHero".to_string(),
    });

    let mut registry = DescriptorRegistry::new();
    registry.register(Descriptor::Interface(original.clone()));
    registry.register(Descriptor::Interface(impostor));

    assert_eq!(registry.len(), 1);
    let registered = registry.get("IHero").and_then(Descriptor::as_interface).unwrap();
    assert!(Arc::ptr_eq(registered, &original));
}

#[test]
fn already_registered_descriptors_are_not_traversed_again() {
    let i_base = iface("IBase", vec![]);
    let i_hero = iface("IHero", vec![i_base]);

    let mut registry = DescriptorRegistry::new();
    registry.register(Descriptor::Interface(iface("IHero", vec![])));
    registry.register(Descriptor::Interface(i_hero));

    assert!(registry.contains("IHero"));
    assert!(!registry.contains("IBase"));
}

#[test]
fn shared_bases_are_registered_once() {
    let i_frag = iface("IFrag", vec![]);
    let droid = class("Droid", vec![i_frag.clone()]);
    let human = class("Human", vec![i_frag.clone()]);

    let mut registry = DescriptorRegistry::new();
    registry.register(parser(i_frag, vec![droid, human]));

    let graph = registry.into_model_graph();
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.interfaces().count(), 1);
    assert_eq!(graph.classes().count(), 2);
    assert_eq!(graph.result_parsers().count(), 1);
}

#[test]
fn empty_registry_yields_empty_graph() {
    let registry = DescriptorRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.into_model_graph().is_empty());
}
