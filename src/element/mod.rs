//! Composed element tree handed to the rasterizer.
//!
//! Elements describe *what* is drawn in a content region. Absolute placement is
//! decided by the layout shells, which wrap element trees in positioned layers.

use crate::{
    foundation::core::{Edges, Rgba8},
    model::options::ImageFit,
    theme::{
        palette::ThemeConfig,
        typography::{FontWeight, TypeScale},
    },
};

/// Main axis of a [`Element::Stack`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Column,
    Row,
}

/// Cross-axis alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

/// Main-axis distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Semantic role of a text run. Rasterizers may key font choice off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    Headline,
    Highlight,
    Title,
    Body,
    Label,
    Caption,
    Quote,
    Number,
    Glyph,
}

/// Visual weight of a [`Element::Panel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// De-emphasized surface (e.g. the "before" side of a comparison).
    Muted,
    /// Neutral surface.
    Plain,
    /// Accent-bordered surface (e.g. the "after" side of a comparison).
    Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    pub scale: TypeScale,
    pub size_px: f64,
    pub weight: FontWeight,
    pub color: Rgba8,
    pub align: TextAlign,
    pub italic: bool,
}

impl TextStyle {
    pub fn new(scale: TypeScale, weight: FontWeight, color: Rgba8) -> Self {
        Self {
            scale,
            size_px: scale.px(),
            weight,
            color,
            align: TextAlign::Left,
            italic: false,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// One node of a composed content tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Stack {
        axis: Axis,
        gap_px: f64,
        align: Align,
        justify: Justify,
        children: Vec<Element>,
    },
    Text {
        content: String,
        role: TextRole,
        style: TextStyle,
    },
    /// Filled circle with a short centered label (avatars, step numbers, option letters).
    Badge {
        label: String,
        diameter_px: f64,
        fill: Rgba8,
        color: Rgba8,
    },
    Panel {
        emphasis: Emphasis,
        fill: Rgba8,
        #[serde(skip_serializing_if = "Option::is_none")]
        border: Option<Rgba8>,
        padding: Edges,
        children: Vec<Element>,
    },
    Image {
        source: String,
        fit: ImageFit,
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<String>,
        /// Width over height. `None` keeps the intrinsic ratio.
        #[serde(skip_serializing_if = "Option::is_none")]
        aspect: Option<f64>,
        /// Fraction of the available width.
        width_fraction: f64,
    },
    /// Visible stand-in for content that could not be resolved.
    Placeholder { message: String, type_name: String },
}

impl Element {
    pub fn column(gap_px: f64, children: Vec<Element>) -> Self {
        Self::Stack {
            axis: Axis::Column,
            gap_px,
            align: Align::Start,
            justify: Justify::Start,
            children,
        }
    }

    pub fn row(gap_px: f64, children: Vec<Element>) -> Self {
        Self::Stack {
            axis: Axis::Row,
            gap_px,
            align: Align::Center,
            justify: Justify::Start,
            children,
        }
    }

    /// Set alignment on a stack. No-op for other kinds.
    pub fn aligned(mut self, new_align: Align, new_justify: Justify) -> Self {
        if let Self::Stack { align, justify, .. } = &mut self {
            *align = new_align;
            *justify = new_justify;
        }
        self
    }

    pub fn text(content: impl Into<String>, role: TextRole, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            role,
            style,
        }
    }

    pub fn badge(label: impl Into<String>, diameter_px: f64, fill: Rgba8, color: Rgba8) -> Self {
        Self::Badge {
            label: label.into(),
            diameter_px,
            fill,
            color,
        }
    }

    /// Panel whose fill and border follow `emphasis` under `theme`.
    pub fn panel(emphasis: Emphasis, theme: &ThemeConfig, children: Vec<Element>) -> Self {
        let (fill, border) = match emphasis {
            Emphasis::Muted => (theme.grid, None),
            Emphasis::Plain => (theme.overlay, None),
            Emphasis::Accent => (theme.overlay, Some(theme.accent)),
        };
        Self::Panel {
            emphasis,
            fill,
            border,
            padding: Edges::uniform(32.0),
            children,
        }
    }

    pub fn image(source: impl Into<String>, fit: ImageFit) -> Self {
        Self::Image {
            source: source.into(),
            fit,
            position: None,
            aspect: None,
            width_fraction: 1.0,
        }
    }

    pub fn placeholder(type_name: impl Into<String>) -> Self {
        Self::Placeholder {
            message: "Unknown slide type".to_string(),
            type_name: type_name.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Self::Stack { children, .. } | Self::Panel { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first, pre-order text runs in this subtree.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Text { content, .. } => out.push(content),
            Self::Badge { label, .. } => out.push(label),
            Self::Placeholder { message, .. } => out.push(message),
            _ => {}
        }
        for child in self.children() {
            child.collect_texts(out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/mod.rs"]
mod tests;
