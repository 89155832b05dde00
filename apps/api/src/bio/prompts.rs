// The single LLM prompt for bio generation.
// The five form fields are embedded verbatim — no escaping beyond what the
// transport requires.

use crate::bio::form::BioRequest;

/// Bio generation prompt template.
/// Replace: {industry}, {job_title}, {skills}, {achievements}, {objectives}
pub const BIO_PROMPT_TEMPLATE: &str = r#"As a proficient personal branding specialist, create an engaging LinkedIn bio for me, taking into account these essential elements:

* Industry or Field: {industry}
* Job Title: {job_title}
* Primary Skills: {skills}
* Significant Experiences: {achievements}
* Aims: {objectives}

Task Guidelines:

1. Grasp the industry, main skills, prominent experiences, and objectives.
2. Compose exactly two alternative LinkedIn bios, numbered "1." and "2.", each succinct and captivating, displaying your distinct value proposition.
3. Begin each bio with a powerful introductory statement: utilize the initial sentence to capture the reader's interest and emphasize your primary skills and expertise.
4. Emphasize your main skills and experiences, establishing yourself as a specialist in your area.
5. Make sure each bio is consistent with your professional objectives and appeals to your target audience.
6. Integrate industry and skill-related keywords to enhance your profile's discoverability in search results.
7. Maintain conciseness: limit each bio to 3-4 paragraphs, concentrating on the most relevant information and omitting unnecessary specifics.
8. Incorporate a personal aspect: share information about your hobbies, interests, or volunteer work if any were provided, to present a more comprehensive view of yourself.
9. Optimize each bio for readability, professionalism, and personal brand enhancement.

Deliverable:

Supply exactly two engaging LinkedIn bios, numbered "1." and "2.", customized to the chosen industry, primary skills, significant experiences, and objectives. Each bio should highlight your unique value proposition and establish you as an expert in your field. Present the content in markdown format."#;

/// Builds the completion prompt by filling the template with the form fields.
pub fn render_bio_prompt(request: &BioRequest) -> String {
    BIO_PROMPT_TEMPLATE
        .replace("{industry}", &request.industry)
        .replace("{job_title}", &request.job_title)
        .replace("{skills}", &request.skills)
        .replace("{achievements}", &request.achievements)
        .replace("{objectives}", &request.objectives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_five_fields_verbatim() {
        let request = BioRequest {
            industry: "EdTech".to_string(),
            job_title: "Software Engineer".to_string(),
            skills: "React.js, NextJS".to_string(),
            achievements: "Shipped a learning platform to 2M students".to_string(),
            objectives: "networking, job hunting".to_string(),
        };

        let prompt = render_bio_prompt(&request);

        assert!(prompt.contains("Industry or Field: EdTech"));
        assert!(prompt.contains("Job Title: Software Engineer"));
        assert!(prompt.contains("Primary Skills: React.js, NextJS"));
        assert!(prompt.contains("Significant Experiences: Shipped a learning platform to 2M students"));
        assert!(prompt.contains("Aims: networking, job hunting"));
    }

    #[test]
    fn test_prompt_requests_two_numbered_bios() {
        let prompt = render_bio_prompt(&BioRequest::default());
        assert!(prompt.contains("exactly two"));
        assert!(prompt.contains(r#"numbered "1." and "2.""#));
        assert!(prompt.contains("3-4 paragraphs"));
        assert!(prompt.contains("markdown"));
    }

    #[test]
    fn test_empty_optional_fields_leave_labels_in_place() {
        let request = BioRequest {
            industry: "Fintech".to_string(),
            job_title: "Analyst".to_string(),
            ..BioRequest::default()
        };
        let prompt = render_bio_prompt(&request);
        // Empty fields pass through as empty strings after their label.
        assert!(prompt.contains("Primary Skills: \n"));
        assert!(prompt.contains("Aims: \n"));
    }
}
