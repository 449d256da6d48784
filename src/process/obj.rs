use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::primitives::tri_mesh::TriMesh;
use crate::primitives::triangle::Triangle;

const VERTEX: &str = "v";
const FACE: &str = "f";

#[derive(Debug)]
pub struct ObjScene {
    vertices: Vec<[f64; 3]>,
    mesh: TriMesh,
}

impl ObjScene {
    pub fn new() -> Self {
        ObjScene {
            vertices: Vec::new(),
            mesh: TriMesh::new(),
        }
    }

    pub fn vertices(&self) -> &Vec<[f64; 3]> {
        &self.vertices
    }

    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> TriMesh {
        self.mesh
    }

    fn vertex(&self, line: usize, token: &str) -> Result<[f64; 3]> {
        // texture and normal references after the first slash are dropped
        let field = token.split('/').next().unwrap_or(token);
        let index: i64 = field.parse().map_err(|source| Error::ParseIndex {
            line,
            token: token.to_string(),
            source,
        })?;
        let count = self.vertices.len();
        if index < 1 || index as u64 > count as u64 {
            return Err(Error::IndexOutOfRange { line, index, count });
        }
        Ok(self.vertices[(index - 1) as usize])
    }
}

impl Default for ObjScene {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<ObjScene> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let scene = parse_obj(BufReader::new(file)).map_err(|e| match e {
        Error::Io { source, .. } => Error::io(path, source),
        other => other,
    })?;
    log::info!(
        "{}: {} vertices, {} triangles",
        path.display(),
        scene.vertices().len(),
        scene.mesh().len()
    );
    Ok(scene)
}

/// Single forward pass: vertices accumulate in file order and each face
/// copies the positions it references at the moment it is read.
pub fn parse_obj<R: BufRead>(reader: R) -> Result<ObjScene> {
    let mut scene = ObjScene::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| Error::io("<input>", e))?;
        let mut parts = line.split_whitespace();
        let directive = match parts.next() {
            Some(directive) => directive,
            None => continue,
        };
        let operands: Vec<&str> = parts.collect();

        match directive {
            VERTEX => {
                let coords = take_three(line_no, VERTEX, &operands)?;
                let mut vertex = [0.0; 3];
                for (slot, token) in vertex.iter_mut().zip(coords.iter()) {
                    let value: f64 = token.parse().map_err(|source| Error::ParseFloat {
                        line: line_no,
                        token: token.to_string(),
                        source,
                    })?;
                    if !value.is_finite() {
                        return Err(Error::NonFinite {
                            line: line_no,
                            token: token.to_string(),
                        });
                    }
                    *slot = value;
                }
                scene.vertices.push(vertex);
            }
            FACE => {
                let refs = take_three(line_no, FACE, &operands)?;
                let v0 = scene.vertex(line_no, refs[0])?;
                let v1 = scene.vertex(line_no, refs[1])?;
                let v2 = scene.vertex(line_no, refs[2])?;
                scene.mesh.push(Triangle::new(v0, v1, v2));
            }
            other => log::trace!("line {}: skipping `{}`", line_no, other),
        }
    }

    Ok(scene)
}

fn take_three<'a>(line: usize, directive: &'static str, operands: &[&'a str]) -> Result<[&'a str; 3]> {
    match operands {
        [a, b, c, rest @ ..] => {
            if !rest.is_empty() {
                log::debug!("line {}: ignoring {} extra `{}` operands", line, rest.len(), directive);
            }
            Ok([*a, *b, *c])
        }
        _ => Err(Error::MissingComponent {
            line,
            directive,
            expected: 3,
            found: operands.len(),
        }),
    }
}
