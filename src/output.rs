use svg::{node::element, Document};

use crate::{concept::PolygonSetConcept, polygon_set::PosePolygonSet, pose::Pose};

const COLORS: [&str; 4] = ["#4774AAFF", "#329544FF", "#893566FF", "#C0392BFF"];


pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ViewBox {
    pub fn new() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        }
    }

    pub fn include(&mut self, (x, y): (f64, f64)) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn add_margin(&mut self, margin: f64) {
        self.min_x -= margin;
        self.min_y -= margin;
        self.max_x += margin;
        self.max_y += margin;
    }

    pub fn get(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x - self.min_x, self.max_y - self.min_y)
    }

    fn extent(&self) -> f64 {
        (self.max_x - self.min_x).max(self.max_y - self.min_y)
    }
}


fn make_svg_path(poses: &[Pose], view_box: &mut ViewBox) -> Option<element::Path> {
    let (p0, rest) = poses.split_first()?;

    let mut data = element::path::Data::new();
    data = data.move_to((p0.x, p0.y));
    view_box.include((p0.x, p0.y));

    for p in rest {
        data = data.line_to((p.x, p.y));
        view_box.include((p.x, p.y));
    }

    data = data.close();

    Some(element::Path::new()
        .set("d", data)
        .set("vector-effect", "non-scaling-stroke"))
}

/// A short line from the pose in the direction it is facing
fn make_svg_heading(pose: &Pose, length: f64) -> element::Line {
    element::Line::new()
        .set("x1", pose.x)
        .set("y1", pose.y)
        .set("x2", pose.x + length * pose.theta.cos())
        .set("y2", pose.y + length * pose.theta.sin())
        .set("vector-effect", "non-scaling-stroke")
}

/// Draw every set in its own color, with a heading tick on each vertex.
pub fn make_svg(sets: &[PosePolygonSet]) -> Document {
    let mut view_box = ViewBox::new();

    let mut groups = vec![];

    for (i, set) in sets.iter().enumerate() {
        let color = COLORS[i % COLORS.len()];

        let mut g_polygons = element::Group::new()
            .set("fill", format!("{}22", &color[..7]))
            .set("stroke", color)
            .set("stroke-width", 1);

        for polygon in set.polygons() {
            if let Some(path) = make_svg_path(polygon, &mut view_box) {
                g_polygons = g_polygons.add(path);
            }
        }

        groups.push((color, set, g_polygons));
    }

    let tick = (view_box.extent() / 50.0).max(f64::EPSILON);

    let mut doc = Document::new();

    for (color, set, g_polygons) in groups {
        let mut g_headings = element::Group::new()
            .set("stroke", color)
            .set("stroke-width", 1);

        for pose in set.polygons().flatten() {
            g_headings = g_headings.add(make_svg_heading(pose, tick));
        }

        doc = doc.add(g_polygons).add(g_headings);
    }

    view_box.add_margin(tick * 2.0);

    doc.set("viewBox", view_box.get())
}
