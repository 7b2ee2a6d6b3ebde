//! Service-level output: request/response namespaces and tagged unions.
//!
//! The emitted surface is what downstream crates program against. The tag
//! field is called `method`, payloads sit under `params` (requests) and
//! `result` (responses), and tags are lower-cased method names. Changing any
//! of these is a breaking change for generated clients.

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::generator::Generator;
use crate::model::{Field, FieldKind, Meta, Method, Override, Service};
use crate::sink::Sink;

/// One piece of output with its indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub indent: usize,
}

impl Chunk {
    fn new(text: impl Into<String>, indent: usize) -> Self {
        Self {
            text: text.into(),
            indent,
        }
    }
}

/// Emits the declarations for a whole service.
pub struct Emitter<'a> {
    config: &'a GeneratorConfig,
    generator: Generator<'a>,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a GeneratorConfig, meta: &'a Meta) -> Self {
        Self {
            config,
            generator: Generator::new(config, meta),
        }
    }

    /// Generate the full output for `service` and write it to `sink`.
    ///
    /// Everything is rendered before the first write, so a malformed tree
    /// leaves the sink untouched.
    pub fn emit(&self, service: &Service, sink: &mut dyn Sink) -> GenResult<()> {
        let chunks = self.render(service)?;
        for chunk in &chunks {
            sink.emit(&chunk.text, chunk.indent)?;
        }
        Ok(())
    }

    /// Generate the full output for `service` as ordered chunks.
    pub fn render(&self, service: &Service) -> GenResult<Vec<Chunk>> {
        let mut chunks = Vec::new();

        chunks.push(Chunk::new(self.unions(service)?, 0));
        chunks.push(Chunk::new(self.traits(), 0));

        chunks.push(Chunk::new(
            self.module_header("requests", "IntoRequest, Request, TypedRequest"),
            0,
        ));
        for method in &service.methods {
            chunks.push(Chunk::new(self.declaration(&method.request)?, 1));
            chunks.push(Chunk::new(self.request_glue(method)?, 1));
        }
        chunks.push(Chunk::new("}\n\n", 0));

        chunks.push(Chunk::new(
            self.module_header("responses", "Response, TryFromResponseError"),
            0,
        ));
        for method in &service.methods {
            chunks.push(Chunk::new(self.declaration(&method.response)?, 1));
            chunks.push(Chunk::new(self.response_glue(method)?, 1));
        }
        chunks.push(Chunk::new("}\n", 0));

        Ok(chunks)
    }

    /// Declarations for a top-level request or response composite.
    fn declaration(&self, field: &Field) -> GenResult<String> {
        // Checked up front so a non-composite payload reports its location.
        let payload = Payload::of(field)?;
        match &field.kind {
            FieldKind::Composite { fields, .. } if payload.existing.is_none() => {
                self.generator.structure(field, payload.typename, fields)
            }
            _ => Ok(String::new()),
        }
    }

    fn unions(&self, service: &Service) -> GenResult<String> {
        let mut code = String::new();

        code.push_str("use serde::{Deserialize, Serialize};\n");
        code.push_str(&format!(
            "pub use {}::TryFromResponseError;\n\n",
            self.config.runtime_crate
        ));

        for (union, content, module, pick) in [
            ("Request", "params", "requests", Side::Request),
            ("Response", "result", "responses", Side::Response),
        ] {
            code.push_str("#[allow(non_camel_case_types)]\n");
            code.push_str("#[derive(Clone, Debug, Serialize, Deserialize)]\n");
            code.push_str(&format!(
                "#[serde(tag = \"method\", content = \"{content}\")]\n"
            ));
            code.push_str("#[serde(rename_all = \"lowercase\")]\n");
            code.push_str(&format!("pub enum {union} {{\n"));
            for method in &service.methods {
                let payload = Payload::of(pick.field(method))?;
                code.push_str(&format!("    {}({}),\n", method.name, payload.path(module)));
            }
            code.push_str("}\n\n");

            code.push_str(&format!("impl {union} {{\n"));
            code.push_str("    /// Wire tag of the active case.\n");
            code.push_str("    pub fn method(&self) -> &'static str {\n");
            code.push_str("        match *self {\n");
            for method in &service.methods {
                code.push_str(&format!(
                    "            {union}::{}(_) => {:?},\n",
                    method.name,
                    method.tag()
                ));
            }
            code.push_str("        }\n");
            code.push_str("    }\n");
            code.push_str("}\n\n");
        }

        Ok(code)
    }

    fn traits(&self) -> String {
        let mut code = String::new();

        code.push_str("pub trait IntoRequest: Into<Request> {\n");
        code.push_str("    type Response: TryFrom<Response, Error = TryFromResponseError>;\n");
        code.push_str("}\n\n");

        code.push_str("pub trait TypedRequest {\n");
        code.push_str("    type Response;\n\n");
        code.push_str("    fn method(&self) -> &str;\n");
        code.push_str("}\n\n");

        code
    }

    fn module_header(&self, module: &str, imports: &str) -> String {
        let mut code = format!("pub mod {module} {{\n");

        if let Some(primitives) = &self.config.primitives_module {
            code.push_str("    #[allow(unused_imports)]\n");
            code.push_str(&format!("    use {primitives}::*;\n"));
        }
        code.push_str("    #[allow(unused_imports)]\n");
        code.push_str("    use serde::{Deserialize, Serialize};\n");
        code.push_str(&format!("    use super::{{{imports}}};\n\n"));

        code
    }

    fn request_glue(&self, method: &Method) -> GenResult<String> {
        let request = Payload::of(&method.request)?.local();
        let response = Payload::of(&method.response)?.path("super::responses");
        let name = &method.name;
        let mut code = String::new();

        code.push_str(&format!("impl From<{request}> for Request {{\n"));
        code.push_str(&format!("    fn from(r: {request}) -> Self {{\n"));
        code.push_str(&format!("        Request::{name}(r)\n"));
        code.push_str("    }\n");
        code.push_str("}\n\n");

        code.push_str(&format!("impl IntoRequest for {request} {{\n"));
        code.push_str(&format!("    type Response = {response};\n"));
        code.push_str("}\n\n");

        code.push_str(&format!("impl TypedRequest for {request} {{\n"));
        code.push_str(&format!("    type Response = {response};\n\n"));
        code.push_str("    fn method(&self) -> &str {\n");
        code.push_str(&format!("        {:?}\n", method.tag()));
        code.push_str("    }\n");
        code.push_str("}\n\n");

        Ok(code)
    }

    fn response_glue(&self, method: &Method) -> GenResult<String> {
        let response = Payload::of(&method.response)?.local();
        let name = &method.name;
        let mut code = String::new();

        code.push_str(&format!("impl TryFrom<Response> for {response} {{\n"));
        code.push_str("    type Error = TryFromResponseError;\n\n");
        code.push_str("    fn try_from(response: Response) -> Result<Self, Self::Error> {\n");
        code.push_str("        match response {\n");
        code.push_str(&format!("            Response::{name}(response) => Ok(response),\n"));
        code.push_str(&format!(
            "            #[allow(unreachable_patterns)]\n            other => Err(TryFromResponseError::new({:?}, other.method())),\n",
            method.tag()
        ));
        code.push_str("        }\n");
        code.push_str("    }\n");
        code.push_str("}\n\n");

        Ok(code)
    }
}

/// The type a top-level request or response composite is known by.
///
/// An `Override::Type` replaces the generated struct everywhere it would be
/// named: the union case, the glue impls and the associated `Response`
/// types. Override paths are emitted verbatim.
struct Payload<'f> {
    typename: &'f str,
    existing: Option<&'f str>,
}

impl<'f> Payload<'f> {
    fn of(field: &'f Field) -> GenResult<Self> {
        let typename = field.composite_typename()?;
        let existing = match &field.type_override {
            Some(Override::Omit) => {
                return Err(GenError::malformed(
                    field.location(),
                    "a method's request or response cannot be omitted",
                ));
            }
            Some(Override::Type(ty)) => Some(ty.as_str()),
            None => None,
        };
        Ok(Self { typename, existing })
    }

    /// Name as seen from inside the namespace module.
    fn local(&self) -> &'f str {
        self.existing.unwrap_or(self.typename)
    }

    /// Path as seen from outside the namespace module.
    fn path(&self, module: &str) -> String {
        match self.existing {
            Some(ty) => ty.to_string(),
            None => format!("{module}::{}", self.typename),
        }
    }
}

/// Which half of a method a union carries.
#[derive(Clone, Copy)]
enum Side {
    Request,
    Response,
}

impl Side {
    fn field(self, method: &Method) -> &Field {
        match self {
            Side::Request => &method.request,
            Side::Response => &method.response,
        }
    }
}

/// Generate declarations for `service` into `sink`.
pub fn generate(
    service: &Service,
    meta: &Meta,
    config: &GeneratorConfig,
    sink: &mut dyn Sink,
) -> GenResult<()> {
    Emitter::new(config, meta).emit(service, sink)
}
