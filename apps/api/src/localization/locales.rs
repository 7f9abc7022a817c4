// Built-in locale data. Each entry must stay entirely in its own language.

use super::{ErrorMessages, LabelSet, LocaleEntry, PromptVariant};

pub(super) fn english() -> LocaleEntry {
    LocaleEntry {
        labels: LabelSet {
            upload: "Upload your resume (PDF or DOC/DOCX format)",
            job_desc: "Job Description",
            analyze: "Analyze Resume",
            results: "Analysis Results",
        },
        prompts: PromptVariant {
            system_msg: "You are a professional resume analyzer. Your task is to analyze resumes in English.
Always structure your response as follows:
1. Match Score (%)
2. Key Strengths
3. Missing Skills
4. Improvement Suggestions",
            user_msg: "Please analyze this resume against the job description in English.
Ensure you follow the exact format mentioned above.",
            result_prefix: "Analysis Results:\n\n",
            mail_system_msg: "You are a professional career coach who writes concise, personalized \
cold emails for job and internship applications.",
            mail_user_msg: "Write a cold email for this job using the template below. Personalize it \
with details from the resume and the job description, and keep every bracketed placeholder \
you cannot fill unchanged.",
        },
        errors: ErrorMessages {
            analysis: "Error in analysis. Please try again or contact support.",
            unsupported_format: "Unsupported file format. Please upload a PDF, DOC or DOCX file.",
            extraction_failed: "Could not read text from the uploaded document.",
            backend_unavailable: "No AI model is configured. Please contact support.",
        },
    }
}

pub(super) fn hindi() -> LocaleEntry {
    LocaleEntry {
        labels: LabelSet {
            upload: "अपना रिज्यूमे अपलोड करें (PDF या DOC/DOCX प्रारूप)",
            job_desc: "नौकरी का विवरण",
            analyze: "रिज्यूमे का विश्लेषण करें",
            results: "विश्लेषण परिणाम",
        },
        prompts: PromptVariant {
            system_msg: "आप एक पेशेवर रिज्यूमे विश्लेषक हैं। आपका काम रिज्यूमे का विश्लेषण हिंदी में करना है।
कृपया अपना जवाब इस प्रारूप में दें:
1. मैच स्कोर (%)
2. मुख्य ताकत
3. कमी वाले कौशल
4. सुधार के सुझाव",
            user_msg: "कृपया इस रिज्यूमे का विश्लेषण नौकरी के विवरण के अनुसार हिंदी में करें।
कृपया ऊपर दिए गए प्रारूप का पालन करें।",
            result_prefix: "विश्लेषण परिणाम:\n\n",
            mail_system_msg: "आप एक पेशेवर करियर कोच हैं जो नौकरी और इंटर्नशिप आवेदनों के लिए \
संक्षिप्त, व्यक्तिगत कोल्ड ईमेल लिखते हैं।",
            mail_user_msg: "नीचे दिए गए टेम्पलेट का उपयोग करके इस नौकरी के लिए एक कोल्ड ईमेल लिखें। \
इसे रिज्यूमे और नौकरी के विवरण की जानकारी से व्यक्तिगत बनाएं, और जिन कोष्ठक वाले स्थानों को \
आप नहीं भर सकते उन्हें अपरिवर्तित रखें।",
        },
        errors: ErrorMessages {
            analysis: "विश्लेषण में त्रुटि हुई। कृपया पुनः प्रयास करें या सहायता से संपर्क करें।",
            unsupported_format: "असमर्थित फ़ाइल प्रारूप। कृपया PDF, DOC या DOCX फ़ाइल अपलोड करें।",
            extraction_failed: "अपलोड किए गए दस्तावेज़ से टेक्स्ट नहीं पढ़ा जा सका।",
            backend_unavailable: "कोई AI मॉडल कॉन्फ़िगर नहीं है। कृपया सहायता से संपर्क करें।",
        },
    }
}

pub(super) fn telugu() -> LocaleEntry {
    LocaleEntry {
        labels: LabelSet {
            upload: "మీ రెస్యూమ్‌ని అప్‌లోడ్ చేయండి (PDF లేదా DOC/DOCX ఫార్మాట్)",
            job_desc: "ఉద్యోగ వివరణ",
            analyze: "రెస్యూమ్ విశ్లేషించండి",
            results: "విశ్లేషణ ఫలితాలు",
        },
        prompts: PromptVariant {
            system_msg: "మీరు ఒక వృత్తిపరమైన రెస్యూమ్ విశ్లేషకులు. మీ పని రెస్యూమ్‌ని తెలుగులో విశ్లేషించడం.
దయచేసి మీ సమాధానాన్ని ఈ ఫార్మాట్‌లో ఇవ్వండి:
1. మ్యాచ్ స్కోర్ (%)
2. ముఖ్య బలాలు
3. కొరవడిన నైపుణ్యాలు
4. మెరుగుదల సూచనలు",
            user_msg: "దయచేసి ఈ రెస్యూమ్‌ని ఉద్యోగ వివరణతో పోల్చి తెలుగులో విశ్లేషించండి.
పైన పేర్కొన్న ఫార్మాట్‌ని ఖచ్చితంగా పాటించండి.",
            result_prefix: "విశ్లేషణ ఫలితాలు:\n\n",
            mail_system_msg: "మీరు ఉద్యోగ మరియు ఇంటర్న్‌షిప్ దరఖాస్తుల కోసం సంక్షిప్తమైన, \
వ్యక్తిగతీకరించిన కోల్డ్ ఈమెయిల్‌లు రాసే వృత్తిపరమైన కెరీర్ కోచ్.",
            mail_user_msg: "క్రింది టెంప్లేట్‌ను ఉపయోగించి ఈ ఉద్యోగం కోసం ఒక కోల్డ్ ఈమెయిల్ రాయండి. \
రెస్యూమ్ మరియు ఉద్యోగ వివరణలోని వివరాలతో దానిని వ్యక్తిగతీకరించండి, మరియు మీరు పూరించలేని \
బ్రాకెట్ ప్లేస్‌హోల్డర్‌లను మార్చకుండా ఉంచండి.",
        },
        errors: ErrorMessages {
            analysis: "విశ్లేషణలో లోపం. దయచేసి మళ్లీ ప్రయత్నించండి లేదా సహాయం కోసం సంప్రదించండి.",
            unsupported_format: "మద్దతు లేని ఫైల్ ఫార్మాట్. దయచేసి PDF, DOC లేదా DOCX ఫైల్‌ను అప్‌లోడ్ చేయండి.",
            extraction_failed: "అప్‌లోడ్ చేసిన పత్రం నుండి వచనాన్ని చదవలేకపోయాము.",
            backend_unavailable: "ఏ AI మోడల్ కాన్ఫిగర్ చేయబడలేదు. దయచేసి సహాయం కోసం సంప్రదించండి.",
        },
    }
}
