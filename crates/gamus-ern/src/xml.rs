//! Árbol mínimo de elementos XML y su serializador.
//!
//! Los builders construyen `Element`s tipados en vez de concatenar cadenas;
//! el único sitio donde el texto se convierte en XML es [`write_document`],
//! que escapa cada nodo de texto y cada valor de atributo.

use std::fmt::{self, Write};

use crate::format::{EscapeContext, escape_xml};

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
  Empty,
  Text(String),
  Children(Vec<Element>),
}

/// Un elemento con nombre, atributos y, o bien texto, o bien hijos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  name: &'static str,
  attributes: Vec<(&'static str, String)>,
  content: Content,
}

impl Element {
  pub fn new(name: &'static str) -> Self {
    Self { name, attributes: Vec::new(), content: Content::Empty }
  }

  /// Elemento hoja con solo texto.
  pub fn leaf(name: &'static str, text: impl Into<String>) -> Self {
    Self::new(name).with_text(text)
  }

  pub fn with_attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
    self.attributes.push((key, value.into()));
    self
  }

  /// Sustituye el contenido por texto.
  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.content = Content::Text(text.into());
    self
  }

  /// Añade un hijo. Un elemento con texto pasa a tener solo hijos.
  pub fn with_child(mut self, child: Element) -> Self {
    self.push_child(child);
    self
  }

  pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
    for child in children {
      self.push_child(child);
    }
    self
  }

  /// Añade el hijo solo si existe.
  pub fn with_optional_child(self, child: Option<Element>) -> Self {
    match child {
      Some(child) => self.with_child(child),
      None => self,
    }
  }

  pub fn push_child(&mut self, child: Element) {
    match &mut self.content {
      Content::Children(children) => children.push(child),
      content => *content = Content::Children(vec![child]),
    }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn attribute(&self, key: &str) -> Option<&str> {
    self.attributes.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
  }

  pub fn text(&self) -> Option<&str> {
    match &self.content {
      Content::Text(text) => Some(text),
      _ => None,
    }
  }

  pub fn children(&self) -> &[Element] {
    match &self.content {
      Content::Children(children) => children,
      _ => &[],
    }
  }

  /// Primer hijo directo con ese nombre.
  pub fn child(&self, name: &str) -> Option<&Element> {
    self.children().iter().find(|c| c.name == name)
  }

  /// Hijos directos con ese nombre.
  pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    self.children().iter().filter(move |c| c.name == name)
  }

  /// Todos los descendientes (sin incluir `self`) en orden de documento.
  pub fn descendants(&self) -> Vec<&Element> {
    let mut out = Vec::new();
    let mut stack: Vec<&Element> = self.children().iter().rev().collect();
    while let Some(el) = stack.pop() {
      out.push(el);
      stack.extend(el.children().iter().rev());
    }
    out
  }

  /// Descendientes con ese nombre, en orden de documento.
  pub fn descendants_named(&self, name: &str) -> Vec<&Element> {
    self.descendants().into_iter().filter(|el| el.name == name).collect()
  }
}

/// Serializa `root` como documento completo, con declaración XML y sangría de
/// dos espacios. El texto se escapa aquí y en ningún otro sitio.
pub fn write_document(root: &Element) -> Result<String, fmt::Error> {
  let mut out = String::new();
  out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
  out.push('\n');
  write_element(&mut out, root, 0)?;
  Ok(out)
}

fn write_element(out: &mut String, el: &Element, depth: usize) -> fmt::Result {
  for _ in 0..depth {
    out.push_str(INDENT);
  }

  write!(out, "<{}", el.name)?;
  for (key, value) in &el.attributes {
    write!(out, " {key}=\"{}\"", escape_xml(value, EscapeContext::Attribute))?;
  }

  match &el.content {
    Content::Empty => out.push_str("/>\n"),
    Content::Text(text) if text.is_empty() => out.push_str("/>\n"),
    Content::Text(text) => {
      writeln!(out, ">{}</{}>", escape_xml(text, EscapeContext::Text), el.name)?;
    }
    Content::Children(children) => {
      out.push_str(">\n");
      for child in children {
        write_element(out, child, depth + 1)?;
      }
      for _ in 0..depth {
        out.push_str(INDENT);
      }
      writeln!(out, "</{}>", el.name)?;
    }
  }

  Ok(())
}
