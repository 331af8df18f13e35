//! Schema description consumed by the dispatcher and executor
//!
//! This is the already-parsed form of the schema: type names, field names,
//! argument lists and return arities. It can render itself as SDL but never
//! parses SDL.

use std::fmt::Write;

/// Root type for read operations
pub const QUERY: &str = "Query";

/// Root type for write operations
pub const MUTATION: &str = "Mutation";

const SCALARS: [&str; 4] = ["ID", "String", "Int", "Boolean"];

/// How many values a field returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one value
    Single,
    /// Zero or one value
    Optional,
    /// A possibly empty list
    List,
}

/// Field return type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef {
    pub name: &'static str,
    pub arity: Arity,
}

impl TypeRef {
    const fn single(name: &'static str) -> Self {
        Self {
            name,
            arity: Arity::Single,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            arity: Arity::Optional,
        }
    }

    const fn list(name: &'static str) -> Self {
        Self {
            name,
            arity: Arity::List,
        }
    }

    fn sdl(&self) -> String {
        match self.arity {
            Arity::Single => format!("{}!", self.name),
            Arity::Optional => self.name.to_string(),
            Arity::List => format!("[{}!]!", self.name),
        }
    }
}

/// Field argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgDef {
    pub name: &'static str,
    pub type_name: &'static str,
    pub required: bool,
}

const fn arg(name: &'static str, type_name: &'static str, required: bool) -> ArgDef {
    ArgDef {
        name,
        type_name,
        required,
    }
}

/// Field on an object type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub args: &'static [ArgDef],
    pub returns: TypeRef,
}

const fn field(name: &'static str, returns: TypeRef) -> FieldDef {
    FieldDef {
        name,
        args: &[],
        returns,
    }
}

const fn field_with_args(
    name: &'static str,
    args: &'static [ArgDef],
    returns: TypeRef,
) -> FieldDef {
    FieldDef {
        name,
        args,
        returns,
    }
}

/// Object type with its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectType {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl ObjectType {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const FILTER_ARGS: &[ArgDef] = &[arg("query", "String", false)];

const CREATE_AUTHOR_ARGS: &[ArgDef] = &[
    arg("name", "String", true),
    arg("email", "String", true),
    arg("age", "Int", false),
];

const CREATE_CONTENT_ARGS: &[ArgDef] = &[
    arg("title", "String", true),
    arg("body", "String", true),
    arg("published", "Boolean", true),
    arg("authorId", "ID", true),
];

const CREATE_ANNOTATION_ARGS: &[ArgDef] = &[
    arg("text", "String", true),
    arg("authorId", "ID", true),
    arg("contentId", "ID", true),
];

const STANDARD_TYPES: &[ObjectType] = &[
    ObjectType {
        name: QUERY,
        fields: &[
            field_with_args("authors", FILTER_ARGS, TypeRef::list("Author")),
            field_with_args("contents", FILTER_ARGS, TypeRef::list("Content")),
            field_with_args("annotations", FILTER_ARGS, TypeRef::list("Annotation")),
            field("me", TypeRef::single("Author")),
            field("singlePost", TypeRef::single("Content")),
        ],
    },
    ObjectType {
        name: MUTATION,
        fields: &[
            field_with_args(
                "createAuthor",
                CREATE_AUTHOR_ARGS,
                TypeRef::single("Author"),
            ),
            field_with_args(
                "createContent",
                CREATE_CONTENT_ARGS,
                TypeRef::single("Content"),
            ),
            field_with_args(
                "createAnnotation",
                CREATE_ANNOTATION_ARGS,
                TypeRef::single("Annotation"),
            ),
        ],
    },
    ObjectType {
        name: "Author",
        fields: &[
            field("id", TypeRef::single("ID")),
            field("name", TypeRef::single("String")),
            field("email", TypeRef::single("String")),
            field("age", TypeRef::optional("Int")),
            field("posts", TypeRef::list("Content")),
            field("comments", TypeRef::list("Annotation")),
        ],
    },
    ObjectType {
        name: "Content",
        fields: &[
            field("id", TypeRef::single("ID")),
            field("title", TypeRef::single("String")),
            field("body", TypeRef::single("String")),
            field("published", TypeRef::single("Boolean")),
            field("author", TypeRef::optional("Author")),
            field("comments", TypeRef::list("Annotation")),
        ],
    },
    ObjectType {
        name: "Annotation",
        fields: &[
            field("id", TypeRef::single("ID")),
            field("text", TypeRef::single("String")),
            field("author", TypeRef::optional("Author")),
            field("post", TypeRef::optional("Content")),
        ],
    },
];

/// The set of object types a dispatcher serves
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    types: &'static [ObjectType],
}

impl Schema {
    /// Authors, content, annotations and the two root types
    pub fn standard() -> Self {
        Self {
            types: STANDARD_TYPES,
        }
    }

    pub fn types(&self) -> &'static [ObjectType] {
        self.types
    }

    pub fn object(&self, name: &str) -> Option<&'static ObjectType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn field(&self, type_name: &str, field: &str) -> Option<&'static FieldDef> {
        self.object(type_name).and_then(|t| t.field(field))
    }

    pub fn is_scalar(type_name: &str) -> bool {
        SCALARS.contains(&type_name)
    }

    /// Render as schema definition language
    pub fn to_sdl(&self) -> String {
        let mut out = String::new();
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "type {} {{", ty.name);
            for f in ty.fields {
                let args = if f.args.is_empty() {
                    String::new()
                } else {
                    let rendered: Vec<String> = f
                        .args
                        .iter()
                        .map(|a| {
                            format!(
                                "{}: {}{}",
                                a.name,
                                a.type_name,
                                if a.required { "!" } else { "" }
                            )
                        })
                        .collect();
                    format!("({})", rendered.join(", "))
                };
                let _ = writeln!(out, "  {}{}: {}", f.name, args, f.returns.sdl());
            }
            out.push_str("}\n");
        }
        out
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::standard()
    }
}
