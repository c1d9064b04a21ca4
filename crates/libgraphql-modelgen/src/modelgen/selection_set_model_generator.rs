use crate::modelgen::ClassDescriptor;
use crate::modelgen::Descriptor;
use crate::modelgen::FragmentKey;
use crate::modelgen::FragmentKind;
use crate::modelgen::FragmentNode;
use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::ModelContext;
use crate::modelgen::ModelGenError;
use crate::modelgen::ModelRequest;
use crate::modelgen::NodeIdentity;
use crate::modelgen::ResultParserDescriptor;
use crate::modelgen::SelectionInfo;
use crate::modelgen::fragment_hoister::extra_case_fragments;
use crate::modelgen::fragment_hoister::hoist_fragment;
use crate::modelgen::interface_synthesizer::synthesize_interface;
use crate::modelgen::type_case_normalizer::normalize_type_cases;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ModelGenError>;

/// Generates the models of one requested selection set: its return
/// interface, one class per (normalized) type case, and the result parser
/// that discriminates between those classes.
pub trait SelectionSetModelGenerator {
    fn generate<'ctx>(
        &self,
        context: &mut ModelContext<'ctx>,
        request: &ModelRequest<'ctx>,
        type_cases: Vec<SelectionInfo<'ctx>>,
    ) -> Result<GeneratedModel>;
}

/// The static return type of a modelled selection and the parser for it.
#[derive(Clone, Debug)]
pub struct GeneratedModel {
    pub result_parser: Arc<ResultParserDescriptor>,
    pub return_type: Arc<InterfaceDescriptor>,
}

/// The interface a requested selection is statically typed as.
pub(crate) fn return_interface<'ctx>(
    context: &mut ModelContext<'ctx>,
    request: &ModelRequest<'ctx>,
) -> Result<Arc<InterfaceDescriptor>> {
    synthesize_interface(context, request.return_node(), request.path())
}

/// Keys of every fragment node the return interface already models.
pub(crate) fn return_keys(request: &ModelRequest<'_>) -> HashSet<FragmentKey> {
    let mut keys = HashSet::new();
    request.return_node().collect_keys(&mut keys);
    keys
}

/// Builds the class for one type case.
///
/// The case is wrapped, re-hoisted against its concrete type, and every
/// fragment of the case that the return interface does not already cover
/// gets an interface of its own which the class also implements.
///
/// `represented_types` are the runtime types the class stands in for. An
/// extra interface is only implemented when its type condition holds for
/// every one of them.
#[allow(clippy::too_many_arguments)]
pub(crate) fn case_class<'ctx>(
    context: &mut ModelContext<'ctx>,
    request: &ModelRequest<'ctx>,
    return_type: &Arc<InterfaceDescriptor>,
    return_keys: &HashSet<FragmentKey>,
    type_case: &SelectionInfo<'ctx>,
    represented_types: &[&'ctx GraphQLType],
    class_type_name: &str,
    proposed_name: &str,
) -> Result<Arc<ClassDescriptor>> {
    let concrete_type = type_case.graphql_type();
    let case_node = FragmentNode::new(
        FragmentKind::Synthetic,
        NodeIdentity::TypeCase {
            concrete_type: concrete_type.name().to_string(),
            selection: request.selection_identity(),
        },
        concrete_type.name(),
        concrete_type,
        type_case.selections().to_vec(),
        type_case.fragments().to_vec(),
    );
    let hoisted = hoist_fragment(concrete_type.name(), &case_node);

    let collector = context.collector();
    let mut implements = vec![return_type.to_owned()];
    for extra in extra_case_fragments(hoisted, return_keys) {
        let applies_to_all = represented_types
            .iter()
            .all(|graphql_type| collector.type_applies(extra.condition_type(), graphql_type));
        if !applies_to_all {
            log::trace!(
                "`{}` (on `{}`) does not hold for every type `{class_type_name}` \
                stands in for at `{}`.",
                extra.name(),
                extra.type_condition(),
                request.path(),
            );
            continue;
        }
        let iface = synthesize_interface(context, extra, request.path())?;
        if !implements.iter().any(|existing| existing.name() == iface.name()) {
            implements.push(iface);
        }
    }

    let name = context.get_or_create_name(
        &FragmentKey::from(NodeIdentity::Class {
            concrete_type: class_type_name.to_string(),
            selection: request.selection_identity(),
        }),
        proposed_name,
    )?;
    let class = Arc::new(ClassDescriptor {
        graphql_type: class_type_name.to_string(),
        implements,
        name,
    });
    log::debug!(
        "Generated class `{}` for `{}` at `{}`.",
        class.name(),
        concrete_type.name(),
        request.path(),
    );
    context.register(Descriptor::Class(class.to_owned()));
    Ok(class)
}

/// Builds and registers the result parser of a request.
///
/// `discriminators` maps each runtime type name to the class built for it.
pub(crate) fn result_parser<'ctx>(
    context: &mut ModelContext<'ctx>,
    request: &ModelRequest<'ctx>,
    return_type: Arc<InterfaceDescriptor>,
    classes: Vec<Arc<ClassDescriptor>>,
    discriminators: IndexMap<String, String>,
) -> Result<Arc<ResultParserDescriptor>> {
    let proposed_name = format!(
        "{}{}",
        request.model_name(),
        context.config().result_parser_suffix,
    );
    let name = context.get_or_create_name(
        &FragmentKey::from(NodeIdentity::ResultParser {
            selection: request.selection_identity(),
        }),
        &proposed_name,
    )?;
    let parser = Arc::new(ResultParserDescriptor {
        classes,
        discriminators,
        name,
        path: request.path().to_owned(),
        return_type,
        source: request.source().to_owned(),
    });
    context.register(Descriptor::ResultParser(parser.to_owned()));
    Ok(parser)
}

/// Shared by the interface and union generators: both model an abstract
/// selection whose type cases may each need their own class.
pub(crate) fn generate_abstract<'ctx>(
    context: &mut ModelContext<'ctx>,
    request: &ModelRequest<'ctx>,
    type_cases: Vec<SelectionInfo<'ctx>>,
) -> Result<GeneratedModel> {
    let declared_type = request.declared_type();
    let return_type = return_interface(context, request)?;
    let return_keys = return_keys(request);

    let possible_types: Vec<&'ctx GraphQLType> = type_cases
        .iter()
        .map(|type_case| type_case.graphql_type())
        .collect();
    let type_cases = if context.config().collapse_type_cases {
        normalize_type_cases(type_cases)
    } else {
        type_cases
    };

    let mut classes = vec![];
    let mut discriminators = IndexMap::new();
    if let [type_case] = type_cases.as_slice() {
        // A lone class stands in for every possible type.
        let class_type_name = if possible_types.len() == 1 {
            type_case.graphql_type().name()
        } else {
            declared_type.name()
        };
        let class = case_class(
            context,
            request,
            &return_type,
            &return_keys,
            type_case,
            &possible_types,
            class_type_name,
            request.model_name(),
        )?;
        for graphql_type in &possible_types {
            discriminators.insert(
                graphql_type.name().to_string(),
                class.name().to_string(),
            );
        }
        classes.push(class);
    } else {
        for type_case in &type_cases {
            let concrete_type_name = type_case.graphql_type().name();
            let class = case_class(
                context,
                request,
                &return_type,
                &return_keys,
                type_case,
                &[type_case.graphql_type()],
                concrete_type_name,
                concrete_type_name,
            )?;
            discriminators.insert(
                concrete_type_name.to_string(),
                class.name().to_string(),
            );
            classes.push(class);
        }
    }

    let result_parser = result_parser(
        context,
        request,
        return_type.to_owned(),
        classes,
        discriminators,
    )?;
    Ok(GeneratedModel {
        result_parser,
        return_type,
    })
}
