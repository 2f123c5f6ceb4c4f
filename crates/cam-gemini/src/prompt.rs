//! Instruction text for the composition request

use cam_catalog::JerseyRecord;

/// Build the generation instruction for a selected jersey.
///
/// Face preservation is stated first and as an absolute rule; image models
/// weigh earlier instructions more heavily and the face is the one element
/// users immediately notice when it drifts.
pub fn build_prompt(jersey: &JerseyRecord) -> String {
    format!(
        "**Primary Directive (Absolute Priority):**\n\
         1. **Preserve Facial Identity:** The face of the person in the generated image must be \
         an exact, 100% identical replica of the face in the uploaded photo. This is the most \
         important rule and overrides all other instructions. Do not alter, modify, or \
         regenerate the face.\n\n\
         **Secondary Task:**\n\
         With the primary directive fulfilled, create a **realistic** image of the person in a \
         full-body athletic pose on the pitch at Estádio de São Luís.\n\n\
         **Image Elements:**\n\
         - **Outfit:** The person must be wearing the provided Farense jersey ({}), along with \
         black shorts, black socks, and football boots.\n\
         - **Environment:** Use the provided stadium image for the background and include the \
         correct football for the era.\n\
         - **Style:** The final image should have the aesthetic of a professional sports \
         photograph.",
        jersey.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cam_catalog::ImageRef;

    #[test]
    fn test_prompt_embeds_description() {
        let jersey = JerseyRecord {
            name: "Farense 1994".to_string(),
            description: "Camisola histórica do Farense de 1994".to_string(),
            year: 1994,
            image: ImageRef::Path("/camisolas/1994.png".to_string()),
            ball: None,
        };
        let prompt = build_prompt(&jersey);
        assert!(prompt.contains("Camisola histórica do Farense de 1994"));
        assert!(prompt.contains("Preserve Facial Identity"));
    }
}
