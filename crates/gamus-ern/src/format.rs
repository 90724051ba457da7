//! Formateadores de texto del mensaje: duraciones, fechas, líneas de derechos
//! y escapado XML.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};

/// Símbolo de la línea de derechos fonográficos.
pub const P_LINE_SYMBOL: char = '℗';

/// Símbolo de la línea de copyright.
pub const C_LINE_SYMBOL: char = '©';

/// Duración en la gramática `PT{m}M{s}S`.
///
/// Los minutos no se normalizan a horas: 3725 s es `PT62M5S`. Una duración
/// desconocida se emite como `PT0M0S`.
pub fn format_duration(seconds: Option<u64>) -> String {
  let total = seconds.unwrap_or(0);
  format!("PT{}M{}S", total / 60, total % 60)
}

/// Año natural de la fecha de lanzamiento.
pub fn resolve_year(release_date: NaiveDate) -> i32 {
  release_date.year()
}

/// Fecha en formato `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

/// Marca de tiempo UTC con precisión de segundos y sufijo `Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
  at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Línea de derechos: el texto explícito gana; si no hay, `"{símbolo} {año} {titular}"`.
pub fn rights_line(explicit: Option<&str>, symbol: char, year: i32, holder: &str) -> String {
  match explicit {
    Some(text) => text.to_string(),
    None => format!("{symbol} {year} {}", holder.trim()),
  }
}

/// Dónde va a insertarse el texto escapado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeContext {
  /// Contenido de un elemento.
  Text,
  /// Valor de atributo entre comillas dobles.
  Attribute,
}

/// Escapa `input` para insertarlo en un documento XML.
///
/// - `&`, `<` y `>` siempre se sustituyen por su entidad.
/// - En atributos también `"`, y los espacios `\t`/`\n` como referencias
///   numéricas para que el parser no los normalice.
/// - `\r` siempre va como `&#13;`.
/// - Los caracteres que XML 1.0 no admite (controles C0, U+FFFE, U+FFFF) se
///   descartan.
///
/// Si no hay nada que cambiar, devuelve la misma cadena sin copiarla.
pub fn escape_xml(input: &str, context: EscapeContext) -> Cow<'_, str> {
  if !input.chars().any(|c| needs_rewrite(c, context)) {
    return Cow::Borrowed(input);
  }

  let mut out = String::with_capacity(input.len() + 16);
  for c in input.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '\r' => out.push_str("&#13;"),
      '"' if context == EscapeContext::Attribute => out.push_str("&quot;"),
      '\n' if context == EscapeContext::Attribute => out.push_str("&#10;"),
      '\t' if context == EscapeContext::Attribute => out.push_str("&#9;"),
      c if !is_xml_char(c) => {}
      c => out.push(c),
    }
  }
  Cow::Owned(out)
}

/// Atajo de [`escape_xml`] para contenido de elementos.
pub fn escape_xml_text(input: &str) -> Cow<'_, str> {
  escape_xml(input, EscapeContext::Text)
}

/// Atajo de [`escape_xml`] para valores de atributo.
pub fn escape_xml_attribute(input: &str) -> Cow<'_, str> {
  escape_xml(input, EscapeContext::Attribute)
}

fn needs_rewrite(c: char, context: EscapeContext) -> bool {
  match c {
    '&' | '<' | '>' | '\r' => true,
    '"' | '\n' | '\t' => context == EscapeContext::Attribute,
    c => !is_xml_char(c),
  }
}

/// Rango `Char` de XML 1.0.
fn is_xml_char(c: char) -> bool {
  matches!(c,
    '\t' | '\n' | '\r'
    | '\u{20}'..='\u{D7FF}'
    | '\u{E000}'..='\u{FFFD}'
    | '\u{10000}'..='\u{10FFFF}')
}
