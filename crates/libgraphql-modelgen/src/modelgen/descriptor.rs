use crate::modelgen::ClassDescriptor;
use crate::modelgen::InterfaceDescriptor;
use crate::modelgen::OperationDescriptor;
use crate::modelgen::ResultParserDescriptor;
use std::sync::Arc;

/// Any generated model descriptor.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Descriptor {
    Class(Arc<ClassDescriptor>),
    Interface(Arc<InterfaceDescriptor>),
    Operation(Arc<OperationDescriptor>),
    ResultParser(Arc<ResultParserDescriptor>),
}
impl Descriptor {
    pub fn as_class(&self) -> Option<&Arc<ClassDescriptor>> {
        if let Self::Class(class) = self { Some(class) } else { None }
    }

    pub fn as_interface(&self) -> Option<&Arc<InterfaceDescriptor>> {
        if let Self::Interface(iface) = self { Some(iface) } else { None }
    }

    pub fn as_operation(&self) -> Option<&Arc<OperationDescriptor>> {
        if let Self::Operation(operation) = self { Some(operation) } else { None }
    }

    pub fn as_result_parser(&self) -> Option<&Arc<ResultParserDescriptor>> {
        if let Self::ResultParser(parser) = self { Some(parser) } else { None }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => class.name(),
            Self::Interface(iface) => iface.name(),
            Self::Operation(operation) => operation.name(),
            Self::ResultParser(parser) => parser.name(),
        }
    }

    /// The descriptors this one refers to directly.
    pub fn referenced_descriptors(&self) -> Vec<Descriptor> {
        match self {
            Self::Class(class) =>
                class.implements().iter().cloned().map(Self::Interface).collect(),

            Self::Interface(iface) =>
                iface.implements().iter().cloned().map(Self::Interface).collect(),

            Self::Operation(operation) => vec![
                Self::Interface(operation.result_type().to_owned()),
                Self::ResultParser(operation.result_parser().to_owned()),
            ],

            Self::ResultParser(parser) => {
                let mut referenced = vec![
                    Self::Interface(parser.return_type().to_owned()),
                ];
                referenced.extend(
                    parser.classes().iter().cloned().map(Self::Class),
                );
                referenced
            },
        }
    }
}

pub(crate) trait NamedDescriptor {
    fn descriptor_name(&self) -> &str;
}
impl NamedDescriptor for ClassDescriptor {
    fn descriptor_name(&self) -> &str {
        self.name()
    }
}
impl NamedDescriptor for InterfaceDescriptor {
    fn descriptor_name(&self) -> &str {
        self.name()
    }
}
impl NamedDescriptor for ResultParserDescriptor {
    fn descriptor_name(&self) -> &str {
        self.name()
    }
}

/// Descriptors refer to one another by name when serialized.
pub(crate) fn serialize_name<S, T>(
    descriptor: &Arc<T>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: NamedDescriptor,
{
    serializer.serialize_str(descriptor.descriptor_name())
}

pub(crate) fn serialize_names<S, T>(
    descriptors: &Vec<Arc<T>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: NamedDescriptor,
{
    serializer.collect_seq(
        descriptors.iter().map(|descriptor| descriptor.descriptor_name()),
    )
}
