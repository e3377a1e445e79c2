//! Fixed license block, package clause and cgo directives of the generated file.

use std::fmt;

const LICENSE: &str = "\
/*
 * Go interface to libheif
 *
 * Copyright (c) 2018-2024 struktur AG, Joachim Bauch <bauch@struktur.de>
 *
 * libheif is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Lesser General Public License as
 * published by the Free Software Foundation, either version 3 of
 * the License, or (at your option) any later version.
 *
 * libheif is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public License
 * along with libheif.  If not, see <http://www.gnu.org/licenses/>.
 */
";

const CGO_IMPORTS: &str = "\
// #cgo pkg-config: libheif
// #include <stdlib.h>
// #include <string.h>
// #include <libheif/heif.h>
import \"C\"
";

/// Go package the generated file belongs to
pub const PACKAGE: &str = "libheif";

/// File header ending in `const build_version = <version>` and a blank line
#[derive(Debug, Clone, Copy)]
pub struct Preamble<'a> {
    pub build_version: &'a str,
}

impl fmt::Display for Preamble<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", LICENSE)?;
        writeln!(f, "package {}\n", PACKAGE)?;
        writeln!(f, "{}", CGO_IMPORTS)?;
        writeln!(f, "const build_version = {}\n", self.build_version)
    }
}
