use log::info;

use crate::model::network_shape::NetworkShape;

pub fn format_memory_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Per-layer summary rows: id, weight dims, bias dims, activation, parameters, memory.
pub fn model_stats_rows(shape: &NetworkShape) -> Vec<String> {
    shape
        .layer_descs()
        .iter()
        .enumerate()
        .map(|(idx, desc)| {
            format!(
                "{:<4} {:<12} {:<10} {:<10} {:<12} {:<10} {:<12}",
                idx,
                desc.weights.dims_label(),
                desc.biases.dims_label(),
                desc.shape.activation.to_string(),
                desc.parameter_count(),
                format!("{}..{}", desc.offset, desc.end()),
                format_memory_kb(desc.memory_requirements())
            )
        })
        .collect()
}

pub fn print_model_stats(shape: &NetworkShape) {
    info!("Model Statistics");
    info!("{:-<76}", "");
    info!(
        "{:<4} {:<12} {:<10} {:<10} {:<12} {:<10} {:<12}",
        "ID", "Weights", "Bias", "Activation", "Parameters", "Offsets", "Memory"
    );
    info!("{:-<76}", "");

    if shape.is_empty() {
        info!("Warning: network has no layers");
        return;
    }

    for row in model_stats_rows(shape) {
        info!("{}", row);
    }

    info!("{:-<76}", "");
    info!("Total Parameters: {}", shape.parameter_count());
    info!("Total Memory: {}", format_memory_kb(shape.total_memory_requirements()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layer_shape::LayerShape;

    #[test]
    fn one_row_per_layer() {
        let shape = NetworkShape::new_with(vec![LayerShape::tanh(3, 2), LayerShape::sigmoid(1, 3)]);
        let rows = model_stats_rows(&shape);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("3×2"));
        assert!(rows[0].contains("tanh"));
        assert!(rows[1].contains("9..13"));
        assert!(rows[1].contains("sigmoid"));
    }

    #[test]
    fn memory_is_reported_in_kb() {
        assert_eq!(format_memory_kb(2048), "2.00 KB");
    }
}
