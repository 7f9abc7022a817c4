// Task instruction templates sent to the backends.
//
// The analysis templates define the numbered output structure the backend must follow.
// Score extraction in `assistant::postprocess` relies on the "Match Score" line, so the
// scoring templates keep it as section 1.

pub const COMPLETE_ANALYSIS: &str = r#"Analyze my resume against the provided job description(s) and provide a comprehensive evaluation, including:
1. Overall Match Score (%): Calculate the candidate's overall suitability (%). Explain the weighting of Key Skills, Experience, and Education.

2. Key Skills Match:
Matching: List proficient skills.
Potential: List skills needing assessment.
Missing: List crucial missing skills.

3. Experience Alignment:
Relevant: Detail correlating experience, quantifying achievements.
Transferable: Identify applicable skills from other roles.
Gaps: Note experience gaps.

4. Education Fit:
Required: State minimum qualifications.
Candidate's: List degrees, certifications, coursework.
Gaps: Identify education discrepancies.
Improvement Suggestions: Offer constructive feedback for strengthening their profile."#;

pub const ATS_OPTIMIZATION: &str = r#"I need you to act as an expert resume writer and optimization specialist. Your ultimate goal is to create a powerful and highly effective resume for me that excels in all aspects: ATS compatibility, recruiter appeal, and alignment with industry best practices.

1. ATS Compatibility Analysis: Thoroughly review my resume for any elements that might hinder its performance in ATS scans. Identify specific areas for improvement, including:
Formatting issues (e.g., use of tables, images, special characters, unusual fonts)
File format (recommend the most ATS-friendly format)
Keyword optimization (lack of relevant keywords, keyword stuffing)
Section headings and organization (ensure logical structure and standard headings)
Date formats and other data inconsistencies

2. Content Enhancement for Recruiter Appeal: Suggest specific changes to better highlight my technical skills, projects, and achievements. Focus on making these elements stand out to recruiters:
Quantifiable achievements: Help me rephrase accomplishments to showcase quantifiable results (e.g., "Increased sales by 15%" instead of "Increased sales").
Project descriptions: Advise on how to write concise and compelling project descriptions that emphasize my contributions and the project's impact.
Technical skills: Ensure my technical skills are prominently displayed and categorized effectively. Suggest ways to showcase proficiency levels (e.g., beginner, intermediate, expert).
Impactful language: Help me use action verbs and strong language to make my resume more dynamic and engaging.

3. Industry Alignment and Tailoring: Provide recommendations on how to tailor my resume language and structure to align with common industry standards and specific job descriptions.
This includes Keyword matching: Explain how to identify and incorporate relevant keywords from job descriptions.
Industry-specific terminology: Suggest appropriate terminology and jargon to use.

4. Resume length and format: Advise on the ideal length and format for my industry and experience level."#;

pub const SKILLS_GAP_ANALYSIS: &str = r#"Provide a concise skills analysis for the candidate, focusing on the following areas:
1. Matching Skills: List the candidate's skills that directly align with the job requirements, quantifying their proficiency where possible.
2. Missing Critical Skills: List the essential skills required for the role that the candidate lacks, prioritizing them based on their importance to job performance.
3. Recommended Skills to Add: List skills that would significantly enhance the candidate's suitability for the role or their future growth within the company, explaining the rationale behind each recommendation.
4. Skill Level Assessment: Provide a qualitative assessment of the candidate's skill level for each matching skill using terms like Beginner, Intermediate, Proficient, and Expert."#;

pub const QUICK_SUMMARY: &str = r#"Provide a brief overview:
1. Match Score (%): Overall suitability (%). Weighting of criteria (e.g., skills, experience, education).
2. Strengths: Top 3, with examples.
3. Gaps: Top 3, prioritized.
4. Next Steps: 2-3 recommendations."#;

pub const PROFESSIONAL_DESCRIPTION: &str =
    "A formal and direct approach, ideal for traditional industries and corporate settings";

pub const PROFESSIONAL_TEMPLATE: &str = r#"Subject: Seeking Internship Opportunity to Learn and Contribute

Dear [Recipient's Name],

I hope you're doing well. My name is [Your Name], and I am currently a [Your Year] student pursuing [Your Degree] at [Your College/University Name].

I am writing to express my interest in an internship opportunity at [Company Name]. I have been following your company's work in [specific field/area], and I am truly inspired by your innovative contributions to the industry.

My academic background and hands-on experience in [specific skills/tools] have prepared me to contribute meaningfully to your team. I am eager to learn from industry experts like you and enhance my skills further.

Could we connect to discuss any available internship opportunities? I have attached my resume for your review and would be happy to provide additional information if needed. Thank you for considering my application. I look forward to the possibility of contributing to your team.

Warm regards,
[Your Full Name]
[Your Phone Number]
[Your Email Address]
[LinkedIn Profile link or Portfolio]"#;

pub const FRIENDLY_DESCRIPTION: &str = "A balanced approach combining warmth with professionalism, suitable for modern companies and startups";

pub const FRIENDLY_TEMPLATE: &str = r#"Subject: Excited to Learn and Contribute - Internship Inquiry

Hi [Recipient's Name],

I hope you're having a great day! I'm [Your Name], currently pursuing [Your Degree] at [Your College/University Name], and I'm reaching out to explore internship opportunities with [Company Name].

I've always admired your company's commitment to [specific value or field]. As someone passionate about [specific area], I believe this could be an incredible place for me to learn and grow.

I've gained practical knowledge in [specific skills or projects] and I'm eager to contribute to your team while gaining real-world experience in the industry/role.

Would it be possible to discuss how I can support your team? I've attached my resume for your reference and would be delighted to provide any further details. Looking forward to hearing from you!

Best regards,
[Your Full Name]
[Your Phone Number]
[Your Email Address]
[LinkedIn Profile Link or Portfolio]"#;

pub const ENTHUSIASTIC_DESCRIPTION: &str = "An energetic approach emphasizing eagerness to learn and contribute, great for innovation-focused companies";

pub const ENTHUSIASTIC_TEMPLATE: &str = r#"Subject: Internship Inquiry: Eager to Learn and Make an Impact

Dear [Recipient's Name],

I hope this email finds you well. My name is [Your Name], and I am a [Year of Study] student specializing in [Your Field of Study] at [Your College/University Name].

I am writing to express my interest in an internship opportunity at [Company Name]. Your organization's work in [specific domain] has always inspired me, particularly [mention a specific project, value, or achievement of the company].

With foundational experience in [your skills/experience], I'm keen to contribute to your team while learning from the expertise of your professionals. I'm confident that this internship will give me an opportunity to develop my skills and create value for your organization.

I would be thrilled to connect and discuss how I can contribute to your team. I've attached my resume for your consideration. Thank you for your time, and I look forward to hearing from you.

Best regards,
[Your Full Name]
[Your Phone Number]
[Your Email Address]
[LinkedIn Profile Link or Portfolio]"#;

/// Restatement appended to the Groq user message for analysis requests.
/// Replace `{language}` before sending.
pub const ANALYSIS_FORMAT_REMINDER: &str = "Remember to:
1. Keep the analysis in {language}
2. Follow the exact format specified
3. Provide clear, actionable feedback
4. Include a numerical match score";

/// Restatement appended to the Groq user message for cold-mail requests.
/// Replace `{language}` before sending.
pub const MAIL_FORMAT_REMINDER: &str = "Remember to:
1. Write the email in {language}
2. Keep the subject line and the structure of the template
3. Leave any bracketed placeholder you cannot fill exactly as written";
