use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Debug, PartialEq)]
struct NamedTypeDefLocation {
    def_location: loc::SourceLocation,
    type_name: String,
}

/// Utility for building a [`Schema`] from one or more SDL documents.
///
/// Type extensions are buffered and applied during [`SchemaBuilder::build()`]
/// so that an extension may be loaded before the definition it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }

        self.validate_type_references()?;

        let query_type = self.resolve_root_type("Query", self.query_type.clone())?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            self.resolve_root_type("Mutation", self.mutation_type.clone())?;
        let subscription_type =
            self.resolve_root_type("Subscription", self.subscription_type.clone())?;

        log::debug!(
            "Built schema with {} types (query root: `{}`).",
            self.types.len(),
            query_type.name(),
        );

        Ok(Schema {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    /// Shorthand for `SchemaBuilder::new().load_str(file_path, content)`.
    pub fn from_str(
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = std::fs::read_to_string(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    err: Arc::new(err),
                })?;
            self = self.load_str(Some(file_path.to_path_buf()), &content)?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content).map_err(|err| {
            let file = file_path.to_owned().unwrap_or_else(|| {
                PathBuf::from(format!("str://{}", self.str_load_counter))
            });
            SchemaBuildError::ParseError {
                file,
                err: err.to_string(),
            }
        })?;
        if file_path.is_none() {
            self.str_load_counter += 1;
        }

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        // https://spec.graphql.org/October2021/#sec-Names.Reserved-Names
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_owned(), ext.position),
        };
        let ext_loc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &position,
        );

        let Some(schema_type) = self.types.get_mut(&type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_loc: ext_loc,
            });
        };

        match (schema_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                enum_type.values.extend(
                    ext.values.into_iter().map(|value| value.name),
                );
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                extend_object_or_interface(
                    &mut iface_type.0,
                    file_path,
                    &ext.fields,
                    &ext.implements_interfaces,
                    &ext_loc,
                )?;
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                extend_object_or_interface(
                    &mut obj_type.0,
                    file_path,
                    &ext.fields,
                    &ext.implements_interfaces,
                    &ext_loc,
                )?;
            },

            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                for member_name in ext.types {
                    union_type.members.insert(
                        member_name.to_owned(),
                        NamedGraphQLTypeRef::new(member_name, ext_loc.to_owned()),
                    );
                }
            },

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) => {
                for field in &ext.fields {
                    let field_loc = loc::SourceLocation::from_schema_ast_position(
                        file_path,
                        &field.position,
                    );
                    inputobj_type.fields.insert(
                        field.name.to_owned(),
                        TypeAnnotation::from_ast_type(&field_loc, &field.value_type),
                    );
                }
            },

            (schema_type, _) => {
                return Err(SchemaBuildError::InvalidExtensionType {
                    type_name,
                    type_kind: GraphQLTypeKind::from(&*schema_type),
                    extension_loc: ext_loc,
                });
            },
        }

        Ok(())
    }

    fn resolve_root_type(
        &self,
        default_type_name: &str,
        declared: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        let typedef_loc = match declared {
            Some(typedef_loc) => typedef_loc,
            None => match self.types.get(default_type_name) {
                Some(GraphQLType::Object(obj_type)) => NamedTypeDefLocation {
                    def_location: obj_type.def_location().to_owned(),
                    type_name: default_type_name.to_string(),
                },
                _ => return Ok(None),
            },
        };

        match self.types.get(typedef_loc.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(NamedGraphQLTypeRef::new(
                typedef_loc.type_name,
                typedef_loc.def_location,
            ))),

            _ => Err(SchemaBuildError::InvalidRootOperationType {
                type_name: typedef_loc.type_name,
                location: typedef_loc.def_location,
            }),
        }
    }

    fn validate_type_references(&self) -> Result<()> {
        let check_exists = |type_ref: &NamedGraphQLTypeRef| -> Result<()> {
            if self.types.contains_key(type_ref.name()) {
                Ok(())
            } else {
                Err(SchemaBuildError::UndefinedTypeReference {
                    type_name: type_ref.name().to_string(),
                    ref_location: type_ref.ref_location().to_owned(),
                })
            }
        };

        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Interface(InterfaceType(data))
                    | GraphQLType::Object(ObjectType(data)) => {
                    for field in data.fields.values() {
                        check_exists(field.type_annotation.inner_named_type_ref())?;
                    }
                    for iface_ref in &data.interfaces {
                        check_exists(iface_ref)?;
                        if !matches!(
                            self.types.get(iface_ref.name()),
                            Some(GraphQLType::Interface(_)),
                        ) {
                            return Err(SchemaBuildError::ImplementsNonInterfaceType {
                                type_name: data.name.to_owned(),
                                implemented_type_name: iface_ref.name().to_string(),
                                location: iface_ref.ref_location().to_owned(),
                            });
                        }
                    }
                },

                GraphQLType::Union(union_type) => {
                    for member_ref in union_type.members.values() {
                        check_exists(member_ref)?;
                        if !matches!(
                            self.types.get(member_ref.name()),
                            Some(GraphQLType::Object(_)),
                        ) {
                            return Err(SchemaBuildError::InvalidUnionMemberType {
                                union_name: union_type.name.to_owned(),
                                member_name: member_ref.name().to_string(),
                                location: member_ref.ref_location().to_owned(),
                            });
                        }
                    }
                },

                GraphQLType::InputObject(inputobj_type) => {
                    for annot in inputobj_type.fields.values() {
                        check_exists(annot.inner_named_type_ref())?;
                    }
                },

                GraphQLType::Bool
                    | GraphQLType::Enum(_)
                    | GraphQLType::Float
                    | GraphQLType::ID
                    | GraphQLType::Int
                    | GraphQLType::Scalar(_)
                    | GraphQLType::String
                    => (),
            }
        }

        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.map(Path::to_path_buf), type_ext));
                Ok(())
            },
            // Directive definitions have no bearing on response shapes.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &schema_def.position,
        );

        let roots = [
            ("query", schema_def.query, &mut self.query_type),
            ("mutation", schema_def.mutation, &mut self.mutation_type),
            ("subscription", schema_def.subscription, &mut self.subscription_type),
        ];
        for (operation, type_name, slot) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: operation.to_string(),
                    location1: existing.def_location.to_owned(),
                    location2: def_location,
                });
            }
            *slot = Some(NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        match type_def {
            TypeDefinition::Enum(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                self.add_new_type(&def.name, &def_location, GraphQLType::Enum(EnumType {
                    def_location: def_location.to_owned(),
                    description: def.description,
                    name: def.name.to_owned(),
                    values: def.values.into_iter().map(|value| value.name).collect(),
                }))
            },

            TypeDefinition::InputObject(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                let fields = def.fields.iter().map(|field| {
                    let field_loc = loc::SourceLocation::from_schema_ast_position(
                        file_path,
                        &field.position,
                    );
                    (
                        field.name.to_owned(),
                        TypeAnnotation::from_ast_type(&field_loc, &field.value_type),
                    )
                }).collect();
                self.add_new_type(&def.name, &def_location, GraphQLType::InputObject(
                    InputObjectType {
                        def_location: def_location.to_owned(),
                        description: def.description,
                        fields,
                        name: def.name.to_owned(),
                    },
                ))
            },

            TypeDefinition::Interface(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                let data = object_or_interface_data_from_ast(
                    file_path,
                    &def_location,
                    &def.name,
                    def.description,
                    &def.fields,
                    &def.implements_interfaces,
                )?;
                self.add_new_type(
                    &def.name,
                    &def_location,
                    GraphQLType::Interface(InterfaceType(data)),
                )
            },

            TypeDefinition::Object(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                let data = object_or_interface_data_from_ast(
                    file_path,
                    &def_location,
                    &def.name,
                    def.description,
                    &def.fields,
                    &def.implements_interfaces,
                )?;
                self.add_new_type(
                    &def.name,
                    &def_location,
                    GraphQLType::Object(ObjectType(data)),
                )
            },

            TypeDefinition::Scalar(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                self.add_new_type(&def.name, &def_location, GraphQLType::Scalar(ScalarType {
                    def_location: def_location.to_owned(),
                    description: def.description,
                    name: def.name.to_owned(),
                }))
            },

            TypeDefinition::Union(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                let mut members = IndexMap::new();
                for member_name in def.types {
                    if members.contains_key(&member_name) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            union_name: def.name.to_owned(),
                            member_name,
                            location: def_location,
                        });
                    }
                    members.insert(
                        member_name.to_owned(),
                        NamedGraphQLTypeRef::new(member_name, def_location.to_owned()),
                    );
                }
                self.add_new_type(&def.name, &def_location, GraphQLType::Union(UnionType {
                    def_location: def_location.to_owned(),
                    description: def.description,
                    name: def.name.to_owned(),
                    members,
                }))
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extend_object_or_interface(
    data: &mut ObjectOrInterfaceTypeData,
    file_path: Option<&Path>,
    fields: &[ast::schema::Field],
    implements_interfaces: &[String],
    ext_loc: &loc::SourceLocation,
) -> Result<()> {
    for (field_name, field) in fielddefs_from_ast(file_path, &data.name, fields)? {
        if let Some(existing) = data.fields.get(&field_name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: data.name.to_owned(),
                field_name,
                field_def1: existing.def_location.to_owned(),
                field_def2: field.def_location,
            });
        }
        data.fields.insert(field_name, field);
    }

    for iface_name in implements_interfaces {
        data.interfaces.push(NamedGraphQLTypeRef::new(
            iface_name,
            ext_loc.to_owned(),
        ));
    }

    Ok(())
}

fn fielddefs_from_ast(
    file_path: Option<&Path>,
    type_name: &str,
    fields: &[ast::schema::Field],
) -> Result<IndexMap<String, Field>> {
    let mut field_map: IndexMap<String, Field> = IndexMap::new();
    for field in fields {
        let fielddef_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &field.position,
        );

        // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
        if field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: fielddef_srcloc,
                field_name: field.name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(existing) = field_map.get(&field.name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name: field.name.to_string(),
                field_def1: existing.def_location.to_owned(),
                field_def2: fielddef_srcloc,
            });
        }

        field_map.insert(field.name.to_string(), Field {
            description: field.description.to_owned(),
            name: field.name.to_string(),
            parent_type: NamedGraphQLTypeRef::new(
                type_name,
                fielddef_srcloc.to_owned(),
            ),
            // graphql_parser doesn't give us a location for the field
            // definition's type annotation itself.
            type_annotation: TypeAnnotation::from_ast_type(
                &fielddef_srcloc,
                &field.field_type,
            ),
            def_location: fielddef_srcloc,
        });
    }
    Ok(field_map)
}

fn object_or_interface_data_from_ast(
    file_path: Option<&Path>,
    def_location: &loc::SourceLocation,
    type_name: &str,
    description: Option<String>,
    fields: &[ast::schema::Field],
    implements_interfaces: &[String],
) -> Result<ObjectOrInterfaceTypeData> {
    let mut field_map = IndexMap::from([(
        "__typename".to_string(),
        Field::typename_meta_field(type_name, def_location),
    )]);
    field_map.extend(fielddefs_from_ast(file_path, type_name, fields)?);

    Ok(ObjectOrInterfaceTypeData {
        def_location: def_location.to_owned(),
        description,
        fields: field_map,
        interfaces: implements_interfaces.iter().map(|iface_name| {
            NamedGraphQLTypeRef::new(iface_name, def_location.to_owned())
        }).collect(),
        name: type_name.to_string(),
    })
}

#[derive(Clone, Debug, Error)]
pub enum SchemaBuildError {
    #[error(
        "The `{union_name}` union type lists `{member_name}` as a member more \
        than once"
    )]
    DuplicatedUnionMember {
        union_name: String,
        member_name: String,
        location: loc::SourceLocation,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("The `{operation}` root operation type was declared more than once")]
    DuplicateOperationDefinition {
        operation: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{implemented_type_name}`, which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        implemented_type_name: String,
        location: loc::SourceLocation,
    },

    #[error("Field names must not start with `__` (found `{type_name}.{field_name}`)")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__` (found `{type_name}`)")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type ({type_kind:?}) with an \
        extension of a different kind of type"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_loc: loc::SourceLocation,
    },

    #[error("Root operation types must be object types, but `{type_name}` is not")]
    InvalidRootOperationType {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but only \
        object types may be union members"
    )]
    InvalidUnionMemberType {
        union_name: String,
        member_name: String,
        location: loc::SourceLocation,
    },

    #[error("No `Query` root operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while reading the schema file `{}`: {err}", file.display())]
    SchemaFileReadError {
        file: PathBuf,
        err: Arc<std::io::Error>,
    },

    #[error("Reference to the undefined type `{type_name}`")]
    UndefinedTypeReference {
        type_name: String,
        ref_location: loc::SourceLocation,
    },
}
