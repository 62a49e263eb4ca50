use crate::layout::PieLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f64,
    pub height: f64,
    pub center: [f64; 2],
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub on_hover_radius: f64,
    pub segments: Vec<SegmentDump>,
}

#[derive(Debug, Serialize)]
pub struct SegmentDump {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
    pub color: String,
    pub path: String,
    pub hover_path: String,
    pub centroid: [f64; 2],
}

impl LayoutDump {
    pub fn from_layout(layout: &PieLayout) -> Self {
        let resting = layout.radii.arc();
        let hover = layout.radii.hover_arc();
        let segments = layout
            .arcs
            .iter()
            .map(|arc| {
                let (cx, cy) = resting.centroid(arc.start_angle, arc.end_angle);
                SegmentDump {
                    index: arc.index,
                    value: arc.value,
                    start_angle: arc.start_angle,
                    end_angle: arc.end_angle,
                    pad_angle: arc.pad_angle,
                    color: arc.color.clone(),
                    path: resting
                        .pad_angle(arc.pad_angle)
                        .path(arc.start_angle, arc.end_angle),
                    hover_path: hover
                        .pad_angle(arc.pad_angle)
                        .path(arc.start_angle, arc.end_angle),
                    centroid: [cx, cy],
                }
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            center: [layout.center.0, layout.center.1],
            inner_radius: layout.radii.inner_radius,
            outer_radius: layout.radii.outer_radius,
            on_hover_radius: layout.radii.on_hover_radius,
            segments,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &PieLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
