// Environment variable names read at startup.

pub const DEPLOYMENT_ENV: &str = "DEPLOYMENT_ENV";

pub const EMAIL_ENABLED: &str = "EMAIL_ENABLED";
pub const SMS_ENABLED: &str = "SMS_ENABLED";

pub const MONGODB_URI: &str = "MONGODB_URI";
pub const DATABASE: &str = "DATABASE";
pub const REDIS_HOST: &str = "REDIS_HOST";
pub const REDIS_PORT: &str = "REDIS_PORT";
pub const REDIS_PASSWORD: &str = "REDIS_PASSWORD";
pub const REDIS_USERNAME: &str = "REDIS_USERNAME";
pub const GRPC_ADDR: &str = "GRPC_ADDR";
pub const GRPC_WEB_ADDR: &str = "GRPC_WEB_ADDR";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_ACCESS_KEY: &str = "AWS_ACCESS_KEY";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const JWT_SECRET_KEY: &str = "JWT_SECRET_KEY";
pub const S3_BUCKET_NAME: &str = "S3_BUCKET_NAME";
pub const S3_BUCKET_URL: &str = "S3_BUCKET_URL";
pub const SENDER_EMAIL: &str = "SENDER_EMAIL";
pub const ZEPTOMAIL_TOKEN: &str = "ZEPTOMAIL_TOKEN";
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const STRIPE_PUBLISHABLE_KEY: &str = "STRIPE_PUBLISHABLE_KEY";
pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
pub const STRIPE_WEBHOOK_SECRET: &str = "STRIPE_WEBHOOK_SECRET";
pub const CONNECTYCUBE_API_KEY: &str = "CONNECTYCUBE_API_KEY";
pub const AWS_SQS_QUEUE_URL: &str = "AWS_SQS_QUEUE_URL";
pub const TWILIO_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const TWILIO_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
pub const TWILIO_SERVICE_ID: &str = "TWILIO_SERVICE_ID";

/// Required variables in the order they are checked.
/// The first one found missing is the one reported.
pub const REQUIRED: &[&str] = &[
    MONGODB_URI,
    DATABASE,
    REDIS_HOST,
    REDIS_PORT,
    REDIS_PASSWORD,
    REDIS_USERNAME,
    GRPC_ADDR,
    GRPC_WEB_ADDR,
    AWS_REGION,
    AWS_ACCESS_KEY,
    AWS_SECRET_ACCESS_KEY,
    JWT_SECRET_KEY,
    S3_BUCKET_NAME,
    S3_BUCKET_URL,
    SENDER_EMAIL,
    ZEPTOMAIL_TOKEN,
    GOOGLE_API_KEY,
    STRIPE_PUBLISHABLE_KEY,
    STRIPE_SECRET_KEY,
    STRIPE_WEBHOOK_SECRET,
    CONNECTYCUBE_API_KEY,
    AWS_SQS_QUEUE_URL,
    TWILIO_ACCOUNT_SID,
    TWILIO_AUTH_TOKEN,
    TWILIO_SERVICE_ID,
];

/// Optional boolean flags. Absent means `false`.
pub const FLAGS: &[&str] = &[EMAIL_ENABLED, SMS_ENABLED];
