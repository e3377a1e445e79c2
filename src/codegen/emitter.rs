//! Go declaration emission for one enum family.
//!
//! Each enum becomes a named Go type over the cgo enum plus a `const` block
//! with one aligned line per member:
//!
//! ```text
//! type Channel C.enum_heif_channel
//!
//! const (
//! 	// luma
//! 	ChannelY  Channel = C.heif_channel_Y
//! 	ChannelCb Channel = C.heif_channel_Cb
//! )
//! ```

use std::fmt::{self, Write};

use crate::codegen::transcode::{transcode, transcode_type_name};
use crate::header::EnumMember;

/// One generated constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub raw_name: String,
    pub comment: Option<String>,
}

/// Type declaration and constants generated for one C enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub enum_name: String,
    pub type_name: String,
    pub constants: Vec<Constant>,
}

impl Declaration {
    pub fn new(enum_name: &str, members: &[EnumMember]) -> Self {
        let constants = members
            .iter()
            .map(|member| Constant {
                name: transcode(&member.raw_name),
                raw_name: member.raw_name.clone(),
                comment: member.rendered_comment(),
            })
            .collect();

        Self {
            enum_name: enum_name.to_string(),
            type_name: transcode_type_name(enum_name),
            constants,
        }
    }

    /// Width every constant name is padded to
    pub fn name_width(&self) -> usize {
        self.constants
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Write the declaration; an enum without members only gets its type line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "type {} C.enum_{}\n", self.type_name, self.enum_name)?;

        if self.constants.is_empty() {
            return Ok(());
        }

        let width = self.name_width();
        writeln!(out, "const (")?;
        for constant in &self.constants {
            if let Some(ref comment) = constant.comment {
                writeln!(out, "{}", comment)?;
            }
            writeln!(
                out,
                "\t{:<width$} {} = C.{}",
                constant.name,
                self.type_name,
                constant.raw_name,
                width = width
            )?;
        }
        writeln!(out, ")\n")
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
