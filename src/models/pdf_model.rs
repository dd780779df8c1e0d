//! models/pdf_model.rs
//! Estructuras de datos del request de PDF (payload subido + campos de texto).

use std::collections::HashMap;

use bytes::Bytes;

/// Nombre del campo multipart que trae el documento.
pub const FILE_FIELD: &str = "file";

/// Valores de texto del formulario. Si un nombre se repite, gana el primero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfFormValues {
    values: HashMap<String, String>,
}

impl PdfFormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta solo si el campo no existía todavía.
    pub fn insert_first(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_insert_with(|| value.into());
    }

    /// Valor del campo, `None` si falta o está vacío.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Valores del query string; el campo `file` nunca se toma de aquí.
    pub fn from_query<I, K, V>(query: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = PdfFormValues::new();
        for (name, value) in query {
            let name = name.into();
            if name != FILE_FIELD {
                form.insert_first(name, value);
            }
        }
        form
    }

    /// Agrega los campos del cuerpo detrás de los ya presentes: el query string
    /// se consulta primero, como en `FormValue`, incluso si su valor está vacío.
    pub fn merge_body(mut self, body: PdfFormValues) -> Self {
        for (name, value) in body.values {
            self.insert_first(name, value);
        }
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PdfFormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = PdfFormValues::new();
        for (name, value) in iter {
            form.insert_first(name, value);
        }
        form
    }
}

/// Nombre fijo del PDF devuelto; el nombre subido no afecta la respuesta.
pub const DOWNLOAD_NAME: &str = "document.pdf";

/// Documento subido. Vive solo durante el request.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    /// Solo para diagnóstico (logs).
    pub file_name: Option<String>,
    pub payload: Bytes,
    pub values: PdfFormValues,
}
