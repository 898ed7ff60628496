use std::mem::size_of;

use anyhow::{anyhow, ensure, Result};
use glow::HasContext;

/// Interleaved `f32` vertex data, optionally indexed, uploaded to a vertex array
pub struct Mesh {
    vertex_array: glow::NativeVertexArray,
    vertex_buffer: glow::NativeBuffer,
    index_buffer: Option<glow::NativeBuffer>,
    element_count: i32,
}

impl Mesh {
    /// `components` lists the float count of each attribute, in location order.
    /// An empty `indices` slice draws the vertices in order.
    pub fn new(
        gl: &glow::Context,
        vertices: &[f32],
        indices: &[u32],
        components: &[i32],
    ) -> Result<Self> {
        let floats_per_vertex = floats_per_vertex(components, vertices.len())?;
        let stride = floats_per_vertex * size_of::<f32>() as i32;

        unsafe {
            let vertex_array = gl
                .create_vertex_array()
                .map_err(|err| anyhow!("Could not create vertex array: {err}"))?;
            gl.bind_vertex_array(Some(vertex_array));

            let vertex_buffer = gl
                .create_buffer()
                .map_err(|err| anyhow!("Could not create vertex buffer: {err}"))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            let index_buffer = if indices.is_empty() {
                None
            } else {
                let buffer = gl
                    .create_buffer()
                    .map_err(|err| anyhow!("Could not create index buffer: {err}"))?;
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buffer));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    bytemuck::cast_slice(indices),
                    glow::STATIC_DRAW,
                );
                Some(buffer)
            };

            let mut offset = 0;
            for (location, count) in components.iter().enumerate() {
                gl.vertex_attrib_pointer_f32(
                    location as u32,
                    *count,
                    glow::FLOAT,
                    false,
                    stride,
                    offset,
                );
                gl.enable_vertex_attrib_array(location as u32);
                offset += count * size_of::<f32>() as i32;
            }

            // The index buffer binding lives in the vertex array, unbind that first
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            let element_count = if indices.is_empty() {
                vertices.len() as i32 / floats_per_vertex
            } else {
                indices.len() as i32
            };

            Ok(Mesh {
                vertex_array,
                vertex_buffer,
                index_buffer,
                element_count,
            })
        }
    }

    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vertex_array));
            if self.index_buffer.is_some() {
                gl.draw_elements(glow::TRIANGLES, self.element_count, glow::UNSIGNED_INT, 0);
            } else {
                gl.draw_arrays(glow::TRIANGLES, 0, self.element_count);
            }
            gl.bind_vertex_array(None);
        }
    }

    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vertex_array);
            gl.delete_buffer(self.vertex_buffer);
            if let Some(buffer) = self.index_buffer {
                gl.delete_buffer(buffer);
            }
        }
    }
}

fn floats_per_vertex(components: &[i32], vertex_floats: usize) -> Result<i32> {
    ensure!(
        components.iter().all(|count| (1..=4).contains(count)),
        "attributes must have between 1 and 4 components"
    );
    let per_vertex: i32 = components.iter().sum();
    ensure!(per_vertex > 0, "a mesh needs at least one attribute");
    ensure!(
        vertex_floats > 0 && vertex_floats % per_vertex as usize == 0,
        "{} floats do not split into vertices of {} floats",
        vertex_floats,
        per_vertex
    );
    Ok(per_vertex)
}
